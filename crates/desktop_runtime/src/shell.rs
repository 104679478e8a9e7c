//! Presentation models for the taskbar, start menu and window frames.
//!
//! These hold no state of their own; they are recomputed from [`DesktopState`] on every render.

use desktop_app_contract::AppKind;

use crate::apps::ApplicationDefinition;
use crate::geometry::maximized_frame;
use crate::model::{DesktopState, Viewport, WindowId, WindowInstance, WindowRect};
use crate::reducer::DesktopAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub title: String,
    pub icon_id: String,
    pub active: bool,
    pub minimized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartMenuEntry {
    pub kind: AppKind,
    pub label: &'static str,
    pub icon_id: &'static str,
}

/// Taskbar buttons in window creation order.
pub fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    state
        .windows
        .iter()
        .map(|win| TaskbarEntry {
            window_id: win.id,
            title: win.title.clone(),
            icon_id: win.icon_id.clone(),
            active: win.is_focused,
            minimized: win.is_minimized,
        })
        .collect()
}

pub fn start_menu_entries(catalog: &[ApplicationDefinition]) -> Vec<StartMenuEntry> {
    catalog
        .iter()
        .map(|entry| StartMenuEntry {
            kind: entry.app_kind(),
            label: entry.display_name,
            icon_id: entry.icon_id,
        })
        .collect()
}

/// Where the frame is drawn. Maximized geometry is applied here and never stored.
pub fn window_frame(
    window: &WindowInstance,
    viewport: Viewport,
    taskbar_height: i32,
) -> WindowRect {
    if window.is_maximized {
        maximized_frame(viewport, taskbar_height)
    } else {
        WindowRect::from_parts(window.position, window.size)
    }
}

/// Inline placement for a frame. Minimized windows stay mounted but are not displayed.
pub fn window_frame_style(
    window: &WindowInstance,
    viewport: Viewport,
    taskbar_height: i32,
) -> String {
    let frame = window_frame(window, viewport, taskbar_height);
    let mut style = format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        frame.x, frame.y, frame.w, frame.h, window.z_index
    );
    if window.is_minimized {
        style.push_str("display:none;");
    }
    style
}

/// Focus action for a pointer press anywhere inside a frame, title-bar buttons included.
pub fn pointer_down_action(window: &WindowInstance) -> Option<DesktopAction> {
    (!window.is_focused || window.is_minimized)
        .then_some(DesktopAction::PointerDownWindow { window_id: window.id })
}

pub fn window_frame_class(window: &WindowInstance) -> String {
    let mut class = String::from("desktop-window");
    if window.is_focused {
        class.push_str(" focused");
    }
    if window.is_minimized {
        class.push_str(" minimized");
    }
    if window.is_maximized {
        class.push_str(" maximized");
    }
    class
}

pub fn taskbar_button_class(entry: &TaskbarEntry) -> &'static str {
    match (entry.active, entry.minimized) {
        (true, _) => "taskbar-window active",
        (false, true) => "taskbar-window minimized",
        (false, false) => "taskbar-window",
    }
}
