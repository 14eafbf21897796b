//! Simulated conversational assistant backend.
//!
//! A keyword-matched stand-in for a real language model: replies come from a
//! fixed lookup table after a short artificial delay, delivered over an mpsc
//! channel from a background thread. No network call happens anywhere here.

mod message;
mod responses;

pub use message::{MessageChange, MessageData, MessageImage, is_html_content, looks_like_envelope};
pub use responses::{CANNED_RESPONSES, DEFAULT_RESPONSE, canned_response};

use crate::config::Config;
use crate::messages::ResponseMessage;
use chrono::{DateTime, Utc};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;
use uuid::Uuid;

/// A decoded reply from the simulated assistant
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub id: String,
    pub message: MessageData,
    pub timestamp: DateTime<Utc>,
}

impl AssistantReply {
    /// The body a caller can stage as a proposed document, if this reply
    /// carries one: a structured change, or a full HTML rewrite.
    pub fn proposed_body(&self) -> Option<&str> {
        match &self.message {
            MessageData::Change { change } => Some(&change.new_msg),
            MessageData::Text { content } if is_html_content(content) => Some(content),
            _ => None,
        }
    }
}

pub struct AssistantBackend {
    response_delay: Duration,
}

impl Default for AssistantBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantBackend {
    /// Build a backend with the reply delay from the user configuration
    pub fn new() -> Self {
        let config = Config::default();
        Self {
            response_delay: Duration::from_millis(config.settings.response_delay_ms),
        }
    }

    pub fn with_delay(response_delay: Duration) -> Self {
        Self { response_delay }
    }

    /// Dispatch a prompt; the decoded reply arrives on `sender` from a
    /// background thread after the simulated latency.
    pub fn send_request(&self, prompt: String, sender: Sender<ResponseMessage>) {
        let delay = self.response_delay;

        thread::spawn(move || {
            thread::sleep(delay);

            let raw = responses::canned_response(&prompt);
            tracing::info!(
                prompt_len = prompt.len(),
                reply_len = raw.len(),
                "assistant reply selected"
            );

            let reply = AssistantReply {
                id: Uuid::new_v4().to_string(),
                message: Self::decode_reply(raw),
                timestamp: Utc::now(),
            };

            if sender.send(ResponseMessage::AssistantReply(reply)).is_err() {
                tracing::warn!("assistant reply receiver dropped");
            }
        });
    }

    /// Decode a raw canned reply: JSON envelopes parse into the tagged
    /// union; anything else, including a JSON-looking string that fails to
    /// parse, stays a plain text message so the raw content still renders.
    fn decode_reply(raw: &str) -> MessageData {
        if looks_like_envelope(raw) {
            match serde_json::from_str(raw.trim()) {
                Ok(message) => return message,
                Err(e) => tracing::warn!("malformed reply envelope, keeping as text: {}", e),
            }
        }
        MessageData::Text {
            content: raw.to_string(),
        }
    }
}
