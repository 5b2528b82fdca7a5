//! src/routes/landing/post.rs
use super::respond;
use crate::backend::BackendClient;
use crate::domain::LandingPage;
use crate::routes::EmailForm;
use actix_web::{web, HttpResponse};
use std::time::Instant;
use uuid::Uuid;

#[tracing::instrument(
    name = "Signing up a new subscriber",
    skip(form, backend),
    fields(
        request_id = %Uuid::new_v4(),
        subscriber_email = %form.email
    )
)]
pub async fn signup(form: web::Form<EmailForm>, backend: web::Data<BackendClient>) -> HttpResponse {
    let mut page = LandingPage::new(form.into_inner().email);

    let email = match page.begin_submit() {
        Ok(email) => email,
        Err(e) => {
            tracing::info!(error = %e, "Signup form rejected");
            return respond(HttpResponse::BadRequest(), &page);
        }
    };

    let outcome = backend.receive_email(&email).await;
    let reached_backend = outcome.is_ok();
    page.settle(outcome, Instant::now());

    if reached_backend {
        respond(HttpResponse::Ok(), &page)
    } else {
        respond(HttpResponse::BadGateway(), &page)
    }
}
