//! Conversational assistant panel.
//!
//! The panel keeps a per-window transcript and forwards each message to the relay named in
//! its launch params. Without a usable relay the window reports that the assistant could not
//! be initialized and keeps its input disabled.

mod backend;
mod transcript;

use desktop_app_contract::WindowRuntimeId;
use leptos::ev::KeyboardEvent;
use leptos::*;
use serde_json::Value;

use crate::backend::ChatEndpoint;
use crate::transcript::{ChatRole, ChatTranscript};

#[component]
pub fn ChatApp(
    window_id: WindowRuntimeId,
    /// Shell-provided parameters; `{"endpoint": "/api/chat"}` enables replies.
    #[prop(optional)]
    launch_params: Value,
) -> impl IntoView {
    let (endpoint, connection) = match ChatEndpoint::from_launch_params(&launch_params) {
        Ok(endpoint) => (Some(endpoint), Ok(())),
        Err(err) => {
            logging::warn!("chat window {window_id}: {err}");
            (None, Err(err))
        }
    };
    let endpoint = store_value(endpoint);

    let transcript = create_rw_signal(ChatTranscript::start(connection));
    let input = create_rw_signal(String::new());
    let history_ref = create_node_ref::<html::Div>();

    create_effect(move |_| {
        transcript.track();
        if let Some(history) = history_ref.get() {
            history.set_scroll_top(history.scroll_height());
        }
    });

    let send = move || {
        let Some(endpoint) = endpoint.get_value() else {
            return;
        };
        let text = input.get_untracked();
        let mut request = None;
        transcript.update(|t| request = t.begin_send(&text));
        let Some(request) = request else {
            return;
        };
        input.set(String::new());

        spawn_local(async move {
            let reply = backend::send_message(&endpoint, &request).await;
            if let Err(err) = &reply {
                logging::warn!("chat window {window_id}: {err}");
            }
            // The window may have closed while the request was in flight.
            let _ = transcript.try_update(|t| t.finish_reply(reply));
        });
    };

    let input_locked = move || transcript.with(|t| !t.accepts_input());
    let send_disabled = move || transcript.with(|t| !t.can_send(&input.get()));

    view! {
        <div class="app-shell app-chat-shell">
            <div class="chat-history" node_ref=history_ref role="log" aria-live="polite">
                <For
                    each=move || transcript.with(|t| t.turns().to_vec())
                    key=|(id, _)| *id
                    let:entry
                >
                    {{
                        let (_, turn) = entry;
                        let row_class = match turn.role {
                            ChatRole::User => "chat-row user",
                            ChatRole::Model => "chat-row model",
                        };
                        view! {
                            <div class=row_class>
                                <div class="chat-bubble">
                                    {turn.paragraphs().into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                                </div>
                            </div>
                        }
                    }}
                </For>
                <Show when=move || transcript.with(ChatTranscript::is_pending) fallback=|| ()>
                    <div class="chat-row model">
                        <div class="chat-bubble chat-typing" aria-label="Waiting for reply">
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </div>
                </Show>
            </div>
            <div class="chat-compose">
                <input
                    type="text"
                    class="chat-input"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    prop:disabled=input_locked
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            send();
                        }
                    }
                />
                <button type="button" class="chat-send" prop:disabled=send_disabled on:click=move |_| send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
