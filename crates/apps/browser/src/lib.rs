//! Browser app panel: an address bar driving a sandboxed frame.

mod address;

use desktop_app_contract::WindowRuntimeId;
use leptos::*;

use crate::address::{resolve_address, HOME_ADDRESS, HOME_URL};

const FRAME_SANDBOX: &str = "allow-forms allow-scripts allow-same-origin allow-popups";

#[component]
pub fn BrowserApp(window_id: WindowRuntimeId) -> impl IntoView {
    let address = create_rw_signal(HOME_ADDRESS.to_string());
    let frame_url = create_rw_signal(HOME_URL.to_string());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let target = address.with_untracked(|input| resolve_address(input));
        frame_url.set(target);
    };

    view! {
        <div class="app-shell app-browser-shell">
            <form class="browser-toolbar" on:submit=on_submit>
                <input
                    type="text"
                    class="browser-address"
                    aria-label="Address"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                />
            </form>
            <iframe
                id=format!("browser-frame-{window_id}")
                class="browser-frame"
                title="Browser"
                src=move || frame_url.get()
                sandbox=FRAME_SANDBOX
            />
        </div>
    }
}
