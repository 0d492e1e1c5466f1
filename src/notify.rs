// src/notify.rs

use std::time::Duration;

use serde_json::json;

use crate::error::{MonitorError, Result};
use crate::roster::USER_AGENT;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Delivers text messages to a Discord webhook. With no target configured
/// this runs in dry-run mode: messages are logged locally and no request
/// is made.
#[derive(Clone, Debug)]
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl Notifier {
    pub fn new(webhook_url: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MonitorError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            webhook_url,
        })
    }

    /// Deliver one message. Failures are logged and swallowed so that one
    /// undeliverable notification never blocks the rest of a cycle.
    pub async fn notify(&self, content: &str) {
        let Some(url) = self.webhook_url.as_deref() else {
            tracing::info!(%content, "webhook not configured, skipping notification");
            return;
        };

        let result = self
            .client
            .post(url)
            .json(&json!({ "content": content }))
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::info!(%content, "sent Discord notification");
            }
            Ok(response) => {
                tracing::error!(
                    status = %response.status(),
                    "Discord webhook rejected notification"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "error sending Discord webhook");
            }
        }
    }
}
