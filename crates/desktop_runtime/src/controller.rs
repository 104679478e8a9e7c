//! Pointer gesture handling for window drag and resize.
//!
//! A gesture lives in [`InteractionState`] from pointer-down to pointer-up. Geometry is only
//! ever written through the [`WindowManager`] move and resize operations.

use crate::geometry::{clamp_drag_position, resize_within_min};
use crate::model::{
    DesktopState, DragSession, Gesture, InteractionState, PointerPosition, Position,
    ResizeEdge, ResizeSession, Viewport, WindowId,
};
use crate::window_manager::{SpawnJitter, WindowManager};

/// Pointer-down anywhere on a window raises and focuses it.
pub fn pointer_down_window<J: SpawnJitter>(
    manager: &WindowManager<J>,
    state: &mut DesktopState,
    window_id: WindowId,
) -> bool {
    manager.focus(state, window_id)
}

/// Starts dragging from the title bar. Maximized windows are focused but not dragged.
pub fn begin_drag<J: SpawnJitter>(
    manager: &WindowManager<J>,
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
    pointer: PointerPosition,
) -> bool {
    interaction.gesture = None;
    if !manager.focus(state, window_id) {
        return false;
    }
    let Some(window) = state.window(window_id) else {
        return false;
    };
    if window.is_maximized {
        return true;
    }
    interaction.gesture = Some(Gesture::Drag(DragSession {
        window_id,
        offset: Position::new(pointer.x - window.position.x, pointer.y - window.position.y),
    }));
    true
}

/// Starts resizing from one of the eight edge zones. Disabled while maximized.
pub fn begin_resize<J: SpawnJitter>(
    manager: &WindowManager<J>,
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: WindowId,
    edge: ResizeEdge,
    pointer: PointerPosition,
) -> bool {
    interaction.gesture = None;
    if !manager.focus(state, window_id) {
        return false;
    }
    let Some(window) = state.window(window_id) else {
        return false;
    };
    if window.is_maximized {
        return true;
    }
    interaction.gesture = Some(Gesture::Resize(ResizeSession {
        window_id,
        edge,
        pointer_start: pointer,
        size_start: window.size,
        position_start: window.position,
    }));
    true
}

/// Advances the active gesture to `pointer`. Returns `false` when nothing was written.
pub fn pointer_move<J: SpawnJitter>(
    manager: &WindowManager<J>,
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    pointer: PointerPosition,
    viewport: Viewport,
) -> bool {
    let Some(gesture) = interaction.gesture.as_ref() else {
        return false;
    };
    let Some(window) = state.window(gesture.window_id()) else {
        interaction.gesture = None;
        return false;
    };

    match gesture {
        Gesture::Drag(session) => {
            let candidate = Position::new(
                pointer.x - session.offset.x,
                pointer.y - session.offset.y,
            );
            let position = clamp_drag_position(
                candidate,
                window.size,
                viewport,
                manager.config().taskbar_height,
            );
            manager.move_to(state, session.window_id, position)
        }
        Gesture::Resize(session) => {
            let dx = pointer.x - session.pointer_start.x;
            let dy = pointer.y - session.pointer_start.y;
            let (position, size) = resize_within_min(
                session.position_start,
                session.size_start,
                window.min_size,
                session.edge,
                dx,
                dy,
            );
            manager.resize(state, session.window_id, size, position)
        }
    }
}

/// Ends whatever gesture is active. Safe to call on every pointer-up or cancel.
pub fn end_gesture(interaction: &mut InteractionState) -> bool {
    interaction.gesture.take().is_some()
}
