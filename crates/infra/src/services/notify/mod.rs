use crate::config::Config;
use agencia_notify_domain::NotificationPayload;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const NOTIFY_KEY_HEADER: &str = "agencia-notify-key";

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Network error when calling the notification endpoint: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Notification endpoint rejected the payload with status {status}: {message}")]
    Endpoint { status: u16, message: String },
}

/// Acknowledgement from the notification endpoint. Any 2xx counts as
/// delivered to the endpoint; what happens to the email afterwards is
/// not tracked.
#[derive(Debug, Clone)]
pub struct DispatchAck {
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Thin client for the external email-sending endpoint. One POST per
/// payload, no retry, no backoff, no queue.
#[derive(Debug, Clone)]
pub struct NotifyClient {
    client: Client,
    endpoint_url: String,
    api_key: String,
}

impl NotifyClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_millis))
            .build()?;

        Ok(Self {
            client,
            endpoint_url: config.notify_endpoint_url.clone(),
            api_key: config.notify_api_key.clone(),
        })
    }

    pub async fn send(&self, payload: &NotificationPayload) -> Result<DispatchAck, DispatchError> {
        let res = self
            .client
            .post(&self.endpoint_url)
            .header(NOTIFY_KEY_HEADER, &self.api_key)
            .json(payload)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await.unwrap_or_default();

        if status.is_success() {
            Ok(DispatchAck {
                status: status.as_u16(),
                message: body,
            })
        } else {
            // Surface the server-provided message when the endpoint
            // returns a structured error body
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            Err(DispatchError::Endpoint {
                status: status.as_u16(),
                message,
            })
        }
    }
}
