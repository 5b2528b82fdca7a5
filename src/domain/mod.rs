//! src/domain/mod.rs
mod confetti;
pub use confetti::Confetti;

mod daily_word;
pub use daily_word::{DailyWord, TODAYS_WORDS};

mod subscriber_email;
pub use subscriber_email::{is_valid_email, EmailError, SubscriberEmail};

pub mod landing;
pub use landing::LandingPage;

pub mod unsubscribe;
pub use unsubscribe::{UnsubscribePage, UnsubscribeStatus};

/// Why a form submission did not reach the backend.
#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error("A submission is already in flight")]
    InFlight,
    #[error("An email address is required")]
    MissingEmail,
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),
}
