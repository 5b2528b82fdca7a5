//! src/domain/landing.rs
use crate::backend::{BackendError, SignupReply};
use crate::domain::{is_valid_email, Confetti, SubmitError, SubscriberEmail};
use std::time::Instant;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address!";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success!";
pub const SIGNUP_FAILED_MESSAGE: &str = "Something went wrong. Please try again later.";

/// State of the signup form for one visitor.
#[derive(Debug, Clone, Default)]
pub struct LandingPage {
    email: String,
    loading: bool,
    message: Option<String>,
    confetti: Option<Confetti>,
    popup_open: bool,
}

impl LandingPage {
    pub fn new(email: String) -> Self {
        Self {
            email,
            ..Self::default()
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn confetti(&self) -> Option<&Confetti> {
        self.confetti.as_ref()
    }

    pub fn confetti_active(&self, now: Instant) -> bool {
        self.confetti.map_or(false, |confetti| confetti.is_active(now))
    }

    pub fn popup_open(&self) -> bool {
        self.popup_open
    }

    pub fn submit_disabled(&self) -> bool {
        !is_valid_email(&self.email) || self.loading
    }

    /// Validates the address and enters the loading state.
    ///
    /// On success the caller owns the single backend call and must report its
    /// outcome through [`LandingPage::settle`].
    pub fn begin_submit(&mut self) -> Result<SubscriberEmail, SubmitError> {
        if self.loading {
            return Err(SubmitError::InFlight);
        }

        let email = SubscriberEmail::parse(self.email.clone()).map_err(|e| {
            self.message = Some(INVALID_EMAIL_MESSAGE.to_string());
            SubmitError::InvalidEmail(e)
        })?;

        self.loading = true;
        Ok(email)
    }

    /// Records how the signup request settled.
    ///
    /// Any reply with a JSON body counts as completed, whatever its status.
    pub fn settle(&mut self, outcome: Result<SignupReply, BackendError>, now: Instant) {
        match outcome {
            Ok(reply) => {
                self.message = Some(
                    reply
                        .message
                        .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
                );
                self.confetti = Some(Confetti::start(now));
                self.popup_open = true;
            }
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Signup request failed");
                self.message = Some(SIGNUP_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    pub fn close_popup(&mut self) {
        self.popup_open = false;
    }
}
