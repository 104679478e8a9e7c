use desktop_app_contract::AppKind;
use serde::{Deserialize, Serialize};

use crate::registry::WindowRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum with `floor`.
    pub fn at_least(self, floor: Size) -> Self {
        Self {
            width: self.width.max(floor.width),
            height: self.height.max(floor.height),
        }
    }

    pub fn covers(self, other: Size) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

/// Browser viewport dimensions, including the taskbar band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Presentation rectangle for a window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn from_parts(position: Position, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.width,
            h: size.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInstance {
    pub id: WindowId,
    pub app_kind: AppKind,
    pub title: String,
    pub icon_id: String,
    pub position: Position,
    pub size: Size,
    pub min_size: Size,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u32,
    pub is_focused: bool,
    /// Geometry captured on entering the maximized state.
    pub saved_position: Option<Position>,
    pub saved_size: Option<Size>,
}

/// Strictly increasing z-index source.
///
/// Lives inside [`DesktopState`] and is only reset by building a new state, which happens once
/// per application start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZOrderAllocator {
    next: u32,
}

impl ZOrderAllocator {
    pub const fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    pub fn allocate(&mut self) -> u32 {
        let z = self.next;
        self.next = self.next.saturating_add(1);
        z
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub windows: WindowRegistry,
    pub start_menu_open: bool,
    next_window_id: u64,
    z_order: ZOrderAllocator,
}

impl DesktopState {
    pub fn new(first_z_index: u32) -> Self {
        Self {
            windows: WindowRegistry::default(),
            start_menu_open: false,
            next_window_id: 1,
            z_order: ZOrderAllocator::starting_at(first_z_index),
        }
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowInstance> {
        self.windows.find(window_id)
    }

    pub(crate) fn allocate_window_id(&mut self) -> WindowId {
        let id = WindowId(self.next_window_id);
        self.next_window_id = self.next_window_id.saturating_add(1);
        id
    }

    pub(crate) fn allocate_z_index(&mut self) -> u32 {
        self.z_order.allocate()
    }
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FIRST_Z_INDEX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub fn touches_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn touches_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn touches_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn touches_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::North => "edge-n",
            Self::South => "edge-s",
            Self::East => "edge-e",
            Self::West => "edge-w",
            Self::NorthEast => "edge-ne",
            Self::NorthWest => "edge-nw",
            Self::SouthEast => "edge-se",
            Self::SouthWest => "edge-sw",
        }
    }

    pub fn cursor(self) -> &'static str {
        match self {
            Self::North | Self::South => "ns-resize",
            Self::East | Self::West => "ew-resize",
            Self::NorthWest | Self::SouthEast => "nwse-resize",
            Self::NorthEast | Self::SouthWest => "nesw-resize",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer offset from the window origin at gesture start.
    pub offset: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub size_start: Size,
    pub position_start: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    Drag(DragSession),
    Resize(ResizeSession),
}

impl Gesture {
    pub fn window_id(&self) -> WindowId {
        match self {
            Self::Drag(session) => session.window_id,
            Self::Resize(session) => session.window_id,
        }
    }
}

/// Transient pointer interaction state; one gesture at most.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub gesture: Option<Gesture>,
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Some(Gesture::Drag(_)))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, Some(Gesture::Resize(_)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn z_order_allocator_never_repeats() {
        let mut alloc = ZOrderAllocator::starting_at(10);
        assert_eq!(alloc.allocate(), 10);
        assert_eq!(alloc.allocate(), 11);
        assert_eq!(alloc.allocate(), 12);
    }

    #[test]
    fn corner_edges_touch_two_sides() {
        for edge in ResizeEdge::ALL {
            let sides = [
                edge.touches_north(),
                edge.touches_south(),
                edge.touches_east(),
                edge.touches_west(),
            ]
            .iter()
            .filter(|touch| **touch)
            .count();
            let expected = match edge {
                ResizeEdge::North | ResizeEdge::South | ResizeEdge::East | ResizeEdge::West => 1,
                _ => 2,
            };
            assert_eq!(sides, expected, "{edge:?}");
        }
    }

    #[test]
    fn size_floor_is_component_wise() {
        let size = Size::new(100, 500).at_least(Size::new(250, 200));
        assert_eq!(size, Size::new(250, 500));
        assert!(size.covers(Size::new(250, 200)));
    }
}
