use super::*;
use crate::shell::{taskbar_button_class, taskbar_entries};

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let style = format!("height:{}px;", runtime.with_config(|config| config.taskbar_height));

    view! {
        <footer
            class="taskbar"
            style=style
            role="toolbar"
            aria-label="Desktop taskbar"
            on:pointerdown=move |ev: web_sys::PointerEvent| {
                ev.stop_propagation();
                if state.with_untracked(|desktop| desktop.start_menu_open) {
                    runtime.dispatch_action(DesktopAction::CloseStartMenu);
                }
            }
        >
            <button
                id="taskbar-start-button"
                class="start-button"
                aria-haspopup="menu"
                aria-controls="desktop-launcher-menu"
                aria-expanded=move || state.get().start_menu_open.to_string()
                on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleStartMenu)
            >
                <span class="taskbar-glyph" data-icon="start" aria-hidden="true"></span>
            </button>
            <div class="taskbar-divider" aria-hidden="true"></div>
            <div class="taskbar-windows" role="group" aria-label="Open windows">
                <For
                    each=move || state.with(taskbar_entries)
                    key=|entry| (entry.window_id.0, entry.active, entry.minimized)
                    let:entry
                >
                    {{
                        let window_id = entry.window_id;
                        view! {
                            <button
                                class=taskbar_button_class(&entry)
                                aria-pressed=entry.active.to_string()
                                title=entry.title.clone()
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::ActivateTaskbarWindow { window_id });
                                }
                            >
                                <span class="taskbar-app-icon" data-icon=entry.icon_id.clone() aria-hidden="true"></span>
                                <span class="taskbar-window-title">{entry.title.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>
        </footer>
    }
}
