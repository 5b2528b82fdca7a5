//! src/domain/subscriber_email.rs
use once_cell::sync::Lazy;
use regex::Regex;

// Something, an `@`, something, a dot and a final segment of two or more characters.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern is a valid regex")
});

#[derive(thiserror::Error, Debug)]
pub enum EmailError {
    #[error("Empty email")]
    Empty,
    #[error("Invalid email: {0}")]
    Invalid(String),
}

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(s: String) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }

        if is_valid_email(&s) {
            Ok(Self(s))
        } else {
            Err(EmailError::Invalid(s))
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
