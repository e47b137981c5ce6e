use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Wire shape of a `/api/chat` reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
struct DarkModePayload {
    #[serde(rename = "darkMode")]
    dark_mode: bool,
}

/// HTTP client for the My.Prompt backend.
#[derive(Debug, Clone)]
pub struct ChatApi {
    client: Client,
    base_url: String,
}

impl ChatApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent("myprompt-cli/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Send one chat message and decode the reply.
    ///
    /// Any transport error or undecodable body surfaces as `Err`; a reply
    /// that decodes but carries `success: false` is returned as-is so the
    /// caller can render the server-reported failure.
    pub async fn send_message(&self, message: &str) -> Result<ChatReply> {
        let reply = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&ChatRequest { message })
            .send()
            .await?
            .json::<ChatReply>()
            .await?;

        Ok(reply)
    }

    /// Advisory dark-mode sync: best effort, no retry.
    ///
    /// Runs as a detached task; the response body is not inspected and a
    /// failure is logged without affecting local theme or preference state.
    pub fn spawn_dark_mode_notify(&self, dark_mode: bool) {
        let client = self.client.clone();
        let url = format!("{}/api/toggle-dark-mode", self.base_url);

        tokio::spawn(async move {
            if let Err(e) = client
                .post(&url)
                .json(&DarkModePayload { dark_mode })
                .send()
                .await
            {
                tracing::warn!("dark mode sync failed: {e}");
            }
        });
    }
}
