//! src/backend/client.rs
use super::BackendError;
use crate::configuration::BackendSettings;
use crate::domain::SubscriberEmail;
use reqwest::{Client, StatusCode};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct AddressBody<'a> {
    address: &'a str,
}

/// What the signup endpoint answered, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupReply {
    pub status: StatusCode,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http_client: Client,
    base_url: String,
}

impl From<BackendSettings> for BackendClient {
    fn from(settings: BackendSettings) -> Self {
        Self::new(settings.base_url)
    }
}

impl BackendClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post_address(&self, path: &str, address: &str) -> Result<reqwest::Response, BackendError> {
        self.http_client
            .post(self.endpoint(path))
            .header("content-type", "application/json")
            .json(&AddressBody { address })
            .send()
            .await
            .map_err(BackendError::Transport)
    }

    /// Registers a new subscriber.
    ///
    /// Any status is accepted as long as the body is JSON other than `null`; an
    /// empty, missing or non-string `message` field is reported as `None`.
    #[tracing::instrument(name = "Forwarding a signup to the backend", skip(self))]
    pub async fn receive_email(&self, email: &SubscriberEmail) -> Result<SignupReply, BackendError> {
        let response = self.post_address("receive-email", email.as_ref()).await?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(BackendError::Transport)?;
        let body: serde_json::Value = serde_json::from_slice(&bytes).map_err(BackendError::Decode)?;
        if body.is_null() {
            return Err(BackendError::NullReply);
        }

        if !status.is_success() {
            tracing::warn!(%status, "Signup endpoint answered with a non-success status");
        }

        let message = body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_owned);

        Ok(SignupReply { status, message })
    }

    /// Removes a subscriber. Only the status of the reply is meaningful.
    #[tracing::instrument(name = "Forwarding an unsubscribe to the backend", skip(self))]
    pub async fn unsubscribe(&self, address: &str) -> Result<StatusCode, BackendError> {
        let response = self.post_address("unsubscribe", address).await?;
        Ok(response.status())
    }
}
