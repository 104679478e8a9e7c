//! HTTP relay for chat replies.
//!
//! The shell hands each chat window its launch params; `endpoint` names a JSON relay that
//! accepts a [`ChatRequest`] by POST and answers with a [`ChatReply`]. Model credentials live
//! behind the relay and never reach the page.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::transcript::{ChatError, ChatTurn};

/// Where chat requests are posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChatEndpoint {
    url: String,
}

impl ChatEndpoint {
    /// Reads `{"endpoint": "..."}` from launch params. Absolute http(s) URLs and
    /// same-origin paths are accepted.
    pub(crate) fn from_launch_params(params: &Value) -> Result<Self, ChatError> {
        let Some(raw) = params.get("endpoint") else {
            return Err(ChatError::NotConfigured);
        };
        let url = raw
            .as_str()
            .map(str::trim)
            .ok_or_else(|| ChatError::InvalidEndpoint(raw.to_string()))?;

        let lower = url.to_ascii_lowercase();
        let absolute = ["http://", "https://"]
            .iter()
            .any(|scheme| lower.len() > scheme.len() && lower.starts_with(scheme));
        let same_origin = url.starts_with('/') && !url.starts_with("//");
        if !(absolute || same_origin) {
            return Err(ChatError::InvalidEndpoint(url.to_string()));
        }

        Ok(Self {
            url: url.to_string(),
        })
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }
}

/// Body posted to the relay: the new message plus every earlier turn, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ChatRequest {
    pub(crate) message: String,
    pub(crate) history: Vec<ChatTurn>,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    text: String,
}

fn encode_request(request: &ChatRequest) -> Result<String, ChatError> {
    serde_json::to_string(request).map_err(|err| ChatError::Request(err.to_string()))
}

fn decode_reply(raw: &str) -> Result<String, ChatError> {
    let reply: ChatReply = serde_json::from_str(raw)
        .map_err(|err| ChatError::Request(format!("malformed reply: {err}")))?;
    if reply.text.trim().is_empty() {
        return Err(ChatError::Request("empty reply".to_string()));
    }
    Ok(reply.text)
}

/// Posts `request` and returns the reply text.
pub(crate) async fn send_message(
    endpoint: &ChatEndpoint,
    request: &ChatRequest,
) -> Result<String, ChatError> {
    let body = encode_request(request)?;
    let raw = imp::post_json(endpoint.url(), &body)
        .await
        .map_err(ChatError::Request)?;
    decode_reply(&raw)
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    pub(super) async fn post_json(url: &str, body: &str) -> Result<String, String> {
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(body));
        let request = Request::new_with_str_and_init(url, &init).map_err(js_error_to_string)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error_to_string)?;

        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error_to_string)?;
        let response: Response = response.dyn_into().map_err(js_error_to_string)?;
        if !response.ok() {
            return Err(format!("relay answered HTTP {}", response.status()));
        }

        let text = JsFuture::from(response.text().map_err(js_error_to_string)?)
            .await
            .map_err(js_error_to_string)?;
        text.as_string()
            .ok_or_else(|| "relay body is not text".to_string())
    }

    fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub(super) async fn post_json(_url: &str, _body: &str) -> Result<String, String> {
        Err("HTTP requests are only available when compiled for wasm32".to_string())
    }
}
