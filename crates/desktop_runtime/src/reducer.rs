//! Reducer actions and transition dispatch for the desktop runtime.

use desktop_app_contract::AppKind;

use crate::controller;
use crate::model::{
    DesktopState, InteractionState, PointerPosition, ResizeEdge, Viewport, WindowId,
};
use crate::window_manager::{SpawnJitter, WindowManager};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window for a catalog entry.
    OpenApp {
        /// Catalog kind to launch.
        kind: AppKind,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a normal window or restore a maximized one.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Taskbar button click for a window (focus, minimize, or restore).
    ActivateTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Pointer-down on the empty desktop.
    DeselectAll,
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Pointer-down on the taskbar outside the start button.
    CloseStartMenu,
    /// Pointer-down on a window body.
    PointerDownWindow {
        /// Window under the pointer.
        window_id: WindowId,
    },
    /// Pointer-down on a window title bar.
    BeginDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Pointer-down on a resize handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Pointer movement while a gesture may be active.
    PointerMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current browser viewport.
        viewport: Viewport,
    },
    /// Pointer released or cancelled.
    EndGesture,
}

/// Applies a [`DesktopAction`] and reports whether desktop or interaction state changed.
///
/// Actions referencing windows or kinds that no longer exist are ignored.
pub fn reduce_desktop<J: SpawnJitter>(
    manager: &mut WindowManager<J>,
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> bool {
    match action {
        DesktopAction::OpenApp { kind } => manager.open(state, kind.as_str()).is_some(),
        DesktopAction::CloseWindow { window_id } => {
            let closed = manager.close(state, window_id);
            if closed
                && interaction.gesture.as_ref().map(|g| g.window_id()) == Some(window_id)
            {
                controller::end_gesture(interaction);
            }
            closed
        }
        DesktopAction::MinimizeWindow { window_id } => manager.minimize(state, window_id),
        DesktopAction::ToggleMaximize { window_id } => manager.toggle_maximize(state, window_id),
        DesktopAction::ActivateTaskbarWindow { window_id } => {
            manager.taskbar_activate(state, window_id)
        }
        DesktopAction::DeselectAll => manager.deselect_all(state),
        DesktopAction::ToggleStartMenu => manager.toggle_start_menu(state),
        DesktopAction::CloseStartMenu => manager.close_start_menu(state),
        DesktopAction::PointerDownWindow { window_id } => {
            controller::pointer_down_window(manager, state, window_id)
        }
        DesktopAction::BeginDrag { window_id, pointer } => {
            controller::begin_drag(manager, state, interaction, window_id, pointer)
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => controller::begin_resize(manager, state, interaction, window_id, edge, pointer),
        DesktopAction::PointerMove { pointer, viewport } => {
            controller::pointer_move(manager, state, interaction, pointer, viewport)
        }
        DesktopAction::EndGesture => controller::end_gesture(interaction),
    }
}
