//! src/routes/landing/get.rs
use super::respond;
use crate::domain::LandingPage;
use actix_web::HttpResponse;

#[tracing::instrument(name = "GET /")]
pub async fn landing_form() -> HttpResponse {
    respond(HttpResponse::Ok(), &LandingPage::default())
}
