//! src/domain/unsubscribe.rs
use crate::backend::BackendError;
use crate::domain::SubmitError;
use reqwest::StatusCode;

pub const UNSUBSCRIBED_MESSAGE: &str = "You have been successfully unsubscribed.";
pub const UNSUBSCRIBE_FAILED_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsubscribeStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct UnsubscribePage {
    email: String,
    status: UnsubscribeStatus,
    message: Option<&'static str>,
}

impl UnsubscribePage {
    pub fn new(email: String) -> Self {
        Self {
            email,
            ..Self::default()
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> UnsubscribeStatus {
        self.status
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    pub fn submit_disabled(&self) -> bool {
        self.status == UnsubscribeStatus::Loading
    }

    /// Enters the loading state and hands back the address to send.
    ///
    /// The address is only required to be present, its shape is left to the backend.
    pub fn begin_submit(&mut self) -> Result<&str, SubmitError> {
        if self.status == UnsubscribeStatus::Loading {
            return Err(SubmitError::InFlight);
        }
        if self.email.trim().is_empty() {
            return Err(SubmitError::MissingEmail);
        }

        self.status = UnsubscribeStatus::Loading;
        Ok(&self.email)
    }

    pub fn settle(&mut self, outcome: Result<StatusCode, BackendError>) {
        let succeeded = match outcome {
            Ok(status) => {
                if !status.is_success() {
                    tracing::warn!(%status, "Unsubscribe endpoint rejected the request");
                }
                status.is_success()
            }
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Unsubscribe request failed");
                false
            }
        };

        if succeeded {
            self.status = UnsubscribeStatus::Success;
            self.message = Some(UNSUBSCRIBED_MESSAGE);
        } else {
            self.status = UnsubscribeStatus::Error;
            self.message = Some(UNSUBSCRIBE_FAILED_MESSAGE);
        }
    }
}
