use super::*;
use crate::shell::start_menu_entries;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let catalog = runtime.catalog();
    let bottom = runtime.with_config(|config| config.taskbar_height);

    view! {
        <Show when=move || state.get().start_menu_open fallback=|| ()>
            <div
                id="desktop-launcher-menu"
                class="start-menu"
                style=format!("bottom:{bottom}px;")
                role="menu"
                aria-label="Application launcher"
                on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
            >
                <For each=move || start_menu_entries(catalog) key=|entry| entry.kind.to_string() let:entry>
                    {{
                        let kind = entry.kind.clone();
                        view! {
                            <button
                                id=format!("desktop-launcher-item-{}", entry.kind)
                                class="start-menu-item"
                                role="menuitem"
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::OpenApp { kind: kind.clone() });
                                }
                            >
                                <span class="start-menu-icon" data-icon=entry.icon_id aria-hidden="true"></span>
                                <span>{entry.label}</span>
                            </button>
                        }
                    }}
                </For>
            </div>
        </Show>
    }
}
