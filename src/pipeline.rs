//! The message send pipeline.
//!
//! Each send walks `Idle → Sending → {Success, Failed} → Idle`: render the
//! user message, call the backend once, render the reply or a friendly error,
//! and always drop the loading indicator on the way back to idle.

use crate::api::{ChatApi, ChatReply};
use crate::chat::ChatMessage;
use crate::state::UiStateController;
use crate::view::ChatView;

/// Shown when the backend answers but reports `success: false` (or an
/// unexpected body shape).
pub const PROCESSING_ERROR_TEXT: &str = "Sorry, there was an error processing your message.";

/// Shown when the request itself fails (network error, undecodable body).
pub const CONNECTION_ERROR_TEXT: &str = "Sorry, there was an error connecting to the server.";

/// Terminal state of one send operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was empty after trimming; nothing rendered, nothing sent.
    Rejected,
    /// Backend replied with `success: true` and a response text.
    Replied,
    /// Backend replied but reported failure.
    ServerError,
    /// The request or the decode failed.
    TransportError,
}

pub struct SendPipeline {
    api: ChatApi,
}

impl SendPipeline {
    pub fn new(api: ChatApi) -> Self {
        Self { api }
    }

    /// Run one send operation to completion.
    ///
    /// No lock guards against overlapping sends; each call resolves
    /// independently against whatever view is current. All failure paths are
    /// recovered locally — this never returns an error to the event loop.
    pub async fn send(&self, input: &str, view: &mut dyn ChatView) -> SendOutcome {
        let message = input.trim();
        if message.is_empty() {
            return SendOutcome::Rejected;
        }

        view.add_message(&ChatMessage::new_user(message), true);
        view.set_loading(true);

        let outcome = match self.api.send_message(message).await {
            Ok(ChatReply {
                success: true,
                response: Some(text),
                ..
            }) => {
                view.add_message(&ChatMessage::new_assistant(text), true);
                SendOutcome::Replied
            }
            Ok(reply) => {
                if let Some(error) = reply.error {
                    tracing::warn!("backend reported failure: {error}");
                }
                view.add_message(&ChatMessage::new_assistant(PROCESSING_ERROR_TEXT), true);
                SendOutcome::ServerError
            }
            Err(e) => {
                tracing::error!("chat request failed: {e:#}");
                view.add_message(&ChatMessage::new_assistant(CONNECTION_ERROR_TEXT), true);
                SendOutcome::TransportError
            }
        };

        // Back to idle on every path.
        view.set_loading(false);
        outcome
    }

    /// Reset the conversation surface and the model selection.
    ///
    /// Does not cancel an in-flight send; a late reply renders into whatever
    /// view is current.
    pub fn start_new_chat(&self, view: &mut dyn ChatView, controller: &mut UiStateController) {
        view.render_welcome();
        controller.reset_model();
    }
}
