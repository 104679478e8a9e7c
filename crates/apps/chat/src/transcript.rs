use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::ChatRequest;

pub(crate) const INIT_FAILURE_NOTICE: &str =
    "Error: Could not initialize AI. Is the API key set correctly?";
pub(crate) const REPLY_FAILURE_NOTICE: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ChatTurn {
    pub(crate) role: ChatRole,
    pub(crate) text: String,
}

impl ChatTurn {
    /// Text split into paragraphs for rendering.
    pub(crate) fn paragraphs(&self) -> Vec<String> {
        self.text.split('\n').map(str::to_string).collect()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum ChatError {
    #[error("no chat backend is configured")]
    NotConfigured,
    #[error("chat endpoint {0} is not an http(s) URL or same-origin path")]
    InvalidEndpoint(String),
    #[error("chat backend request failed: {0}")]
    Request(String),
}

/// Conversation state for one chat window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ChatTranscript {
    turns: Vec<(u64, ChatTurn)>,
    next_turn_id: u64,
    connected: bool,
    pending: bool,
}

impl ChatTranscript {
    /// Starts a session. A failed start leaves a single model notice and refuses input.
    pub(crate) fn start(connection: Result<(), ChatError>) -> Self {
        let mut transcript = Self::default();
        match connection {
            Ok(()) => transcript.connected = true,
            Err(_) => transcript.push(ChatRole::Model, INIT_FAILURE_NOTICE.to_string()),
        }
        transcript
    }

    pub(crate) fn turns(&self) -> &[(u64, ChatTurn)] {
        &self.turns
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }

    pub(crate) fn accepts_input(&self) -> bool {
        self.connected && !self.pending
    }

    pub(crate) fn can_send(&self, input: &str) -> bool {
        self.accepts_input() && !input.trim().is_empty()
    }

    /// Records the user turn and returns the request to forward, or `None` if nothing was sent.
    pub(crate) fn begin_send(&mut self, input: &str) -> Option<ChatRequest> {
        if !self.can_send(input) {
            return None;
        }
        let history = self.turns.iter().map(|(_, turn)| turn.clone()).collect();
        self.push(ChatRole::User, input.to_string());
        self.pending = true;
        Some(ChatRequest {
            message: input.to_string(),
            history,
        })
    }

    pub(crate) fn finish_reply(&mut self, reply: Result<String, ChatError>) {
        if !self.pending {
            return;
        }
        let text = reply.unwrap_or_else(|_| REPLY_FAILURE_NOTICE.to_string());
        self.push(ChatRole::Model, text);
        self.pending = false;
    }

    fn push(&mut self, role: ChatRole, text: String) {
        let id = self.next_turn_id;
        self.next_turn_id = self.next_turn_id.saturating_add(1);
        self.turns.push((id, ChatTurn { role, text }));
    }
}
