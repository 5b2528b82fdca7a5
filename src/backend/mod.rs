//! src/backend/mod.rs
use crate::routes::error_chain_fmt;

mod client;
pub use client::{BackendClient, SignupReply};

#[derive(thiserror::Error)]
pub enum BackendError {
    #[error("Failed to reach the backend")]
    Transport(#[source] reqwest::Error),
    #[error("The backend reply is not valid JSON")]
    Decode(#[source] serde_json::Error),
    #[error("The backend replied with a `null` body")]
    NullReply,
}

impl std::fmt::Debug for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
