//! src/routes/mod.rs
mod health_check;
pub use health_check::*;

mod layout;

mod landing;
pub use landing::*;

mod unsubscribe;
pub use unsubscribe::*;

/// Body of both forms: a single email input.
#[derive(serde::Deserialize, Debug)]
pub struct EmailForm {
    pub email: String,
}

pub(crate) fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
