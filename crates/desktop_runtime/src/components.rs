//! Desktop shell UI composition: window layer, start menu and taskbar.

mod menus;
mod taskbar;
mod window;

use leptos::*;

use self::{menus::StartMenu, taskbar::Taskbar, window::DesktopWindow};

use crate::{
    model::{PointerPosition, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell UI.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.refresh_viewport();
    });
    on_cleanup(move || resize_listener.remove());

    view! {
        <div id="desktop-shell-root" class="desktop-shell">
            <div
                class="desktop-dismiss-layer"
                on:pointerdown=move |_| runtime.dispatch_action(DesktopAction::DeselectAll)
            />
            <div class="desktop-window-layer">
                <For
                    each=move || state.with(|desktop| desktop.windows.iter().map(|w| w.id).collect::<Vec<WindowId>>())
                    key=|window_id| window_id.0
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </div>
            <StartMenu />
            <Taskbar />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}
