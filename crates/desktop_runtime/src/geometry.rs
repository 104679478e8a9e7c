//! Pure geometry helpers for window placement, dragging and resizing.

use crate::config::SpawnRegion;
use crate::model::{Position, ResizeEdge, Size, Viewport, WindowRect};

/// Clamps a dragged window origin so the frame stays above the taskbar band.
///
/// When the window is larger than the available space the origin pins to `0`.
pub fn clamp_drag_position(
    candidate: Position,
    size: Size,
    viewport: Viewport,
    taskbar_height: i32,
) -> Position {
    let max_x = viewport.width - size.width;
    let max_y = viewport.height - size.height - taskbar_height;
    Position {
        x: candidate.x.min(max_x).max(0),
        y: candidate.y.min(max_y).max(0),
    }
}

/// Applies pointer deltas to the captured start geometry for the given edge.
///
/// West and north edges move the origin so the opposite edge stays anchored. The result is not
/// floored; see [`resize_within_min`].
pub fn resize_from_edge(
    start_position: Position,
    start_size: Size,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
) -> (Position, Size) {
    let mut position = start_position;
    let mut size = start_size;
    if edge.touches_east() {
        size.width += dx;
    }
    if edge.touches_south() {
        size.height += dy;
    }
    if edge.touches_west() {
        size.width -= dx;
        position.x += dx;
    }
    if edge.touches_north() {
        size.height -= dy;
        position.y += dy;
    }
    (position, size)
}

/// Edge resize with the resulting size floored at `min_size`.
pub fn resize_within_min(
    start_position: Position,
    start_size: Size,
    min_size: Size,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
) -> (Position, Size) {
    let (position, size) = resize_from_edge(start_position, start_size, edge, dx, dy);
    (position, size.at_least(min_size))
}

/// Frame occupied by a maximized window: the whole viewport minus the taskbar band.
pub fn maximized_frame(viewport: Viewport, taskbar_height: i32) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: viewport.width.max(0),
        h: (viewport.height - taskbar_height).max(0),
    }
}

/// Maps two unit samples in `[0, 1)` onto the spawn region.
pub fn spawn_position(region: SpawnRegion, unit_x: f64, unit_y: f64) -> Position {
    Position {
        x: lerp(region.x_min, region.x_max, unit_x),
        y: lerp(region.y_min, region.y_max, unit_y),
    }
}

fn lerp(min: i32, max: i32, unit: f64) -> i32 {
    let unit = if unit.is_finite() {
        unit.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let span = f64::from(max - min);
    (f64::from(min) + (span * unit).round()) as i32
}
