use super::*;
use crate::apps::find_definition;
use crate::model::ResizeEdge;
use crate::shell::{pointer_down_action, window_frame_class, window_frame_style};
use desktop_app_contract::{window_content_dom_id, AppMountContext};
use leptos::leptos_dom::helpers::WindowListenerHandle;

/// Global pointer listeners for the gesture a window is currently running.
///
/// Attached on gesture begin and removed on pointer-up, pointer-cancel, the next gesture
/// begin, or when the window unmounts.
#[derive(Clone, Copy)]
struct GestureListeners {
    slot: StoredValue<Option<Vec<WindowListenerHandle>>>,
}

impl GestureListeners {
    fn new() -> Self {
        Self {
            slot: store_value(None),
        }
    }

    fn attach(self, runtime: DesktopRuntimeContext) {
        self.detach();

        let on_move = window_event_listener(ev::pointermove, move |ev| {
            let viewport = runtime.viewport.get_untracked();
            runtime.dispatch_action(DesktopAction::PointerMove {
                pointer: pointer_from_pointer_event(&ev),
                viewport,
            });
        });
        let on_up = window_event_listener(ev::pointerup, move |_| {
            runtime.dispatch_action(DesktopAction::EndGesture);
            self.detach();
        });
        let on_cancel = window_event_listener(ev::pointercancel, move |_| {
            runtime.dispatch_action(DesktopAction::EndGesture);
            self.detach();
        });

        self.slot.set_value(Some(vec![on_move, on_up, on_cancel]));
    }

    fn detach(self) {
        let _ = self.slot.try_update_value(|slot| {
            if let Some(handles) = slot.take() {
                for handle in handles {
                    handle.remove();
                }
            }
        });
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(initial) = runtime.state.get_untracked().window(window_id).cloned() else {
        return ().into_view();
    };

    let window = Signal::derive(move || runtime.state.with(|desktop| desktop.window(window_id).cloned()));
    let gesture = GestureListeners::new();
    on_cleanup(move || gesture.detach());

    let focus = move || {
        if let Some(action) = window.get_untracked().as_ref().and_then(pointer_down_action) {
            runtime.dispatch_action(action);
        }
    };
    let press_control = move |ev: web_sys::PointerEvent| {
        focus();
        ev.stop_propagation();
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.refresh_viewport();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
        if runtime.interaction.get_untracked().is_dragging() {
            gesture.attach(runtime);
        }
    };
    let toggle_maximize = move || runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    let is_maximized = move || window.get().map(|w| w.is_maximized).unwrap_or(false);

    let frame_class = move || window.get().map(|w| window_frame_class(&w)).unwrap_or_default();
    let frame_style = move || {
        let taskbar_height = runtime.with_config(|config| config.taskbar_height);
        let viewport = runtime.viewport.get();
        window
            .get()
            .map(|w| window_frame_style(&w, viewport, taskbar_height))
            .unwrap_or_default()
    };

    view! {
        <section
            class=frame_class
            style=frame_style
            data-app=initial.app_kind.to_string()
            on:pointerdown=move |_: web_sys::PointerEvent| focus()
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    toggle_maximize();
                }
            >
                <div class="titlebar-title">
                    <span class="titlebar-app-icon" data-icon=initial.icon_id.clone() aria-hidden="true"></span>
                    <span>{initial.title.clone()}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        aria-label="Minimize window"
                        on:pointerdown=press_control
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                        }
                    >
                        "_"
                    </button>
                    <button
                        aria-label=move || if is_maximized() { "Restore window" } else { "Maximize window" }
                        on:pointerdown=press_control
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_maximize();
                        }
                    >
                        {move || if is_maximized() { "\u{2750}" } else { "\u{25a1}" }}
                    </button>
                    <button
                        class="titlebar-close"
                        aria-label="Close window"
                        on:pointerdown=press_control
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            gesture.detach();
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        }
                    >
                        "\u{00d7}"
                    </button>
                </div>
            </header>
            <div class="window-body">
                <WindowBody window_id=window_id />
            </div>
            <Show when=move || !is_maximized() fallback=|| ()>
                <For each=move || ResizeEdge::ALL key=|edge| edge.css_class() let:edge>
                    <WindowResizeHandle window_id=window_id edge=edge gesture=gesture />
                </For>
            </Show>
        </section>
    }
    .into_view()
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge, gesture: GestureListeners) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", edge.css_class());
    let style = format!("cursor:{};", edge.cursor());

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
        if runtime.interaction.get_untracked().is_resizing() {
            gesture.attach(runtime);
        }
    };

    view! {
        <div class=class_name style=style aria-hidden="true" on:pointerdown=on_pointerdown />
    }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let catalog = runtime.catalog();
    let contents = runtime
        .state
        .get_untracked()
        .window(window_id)
        .and_then(|w| {
            let definition = find_definition(catalog, w.app_kind.as_str())?;
            let launch_params = runtime.with_config(|config| config.launch_params(definition.kind));
            Some(definition.module.mount(AppMountContext {
                app_kind: w.app_kind.clone(),
                window_id: w.id.0,
                launch_params,
            }))
        })
        .unwrap_or_else(|| view! { <p>"App not found"</p> }.into_view());

    view! {
        <div id=window_content_dom_id(window_id.0) class="window-body-content">
            {contents}
        </div>
    }
}
