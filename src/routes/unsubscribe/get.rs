//! src/routes/unsubscribe/get.rs
use super::respond;
use crate::domain::UnsubscribePage;
use actix_web::HttpResponse;

#[tracing::instrument(name = "GET /unsubscribe")]
pub async fn unsubscribe_form() -> HttpResponse {
    respond(HttpResponse::Ok(), &UnsubscribePage::default())
}
