//! src/routes/unsubscribe/post.rs
use super::respond;
use crate::backend::BackendClient;
use crate::domain::{UnsubscribePage, UnsubscribeStatus};
use crate::routes::EmailForm;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

#[tracing::instrument(
    name = "Unsubscribing a subscriber",
    skip(form, backend),
    fields(
        request_id = %Uuid::new_v4(),
        subscriber_email = %form.email
    )
)]
pub async fn unsubscribe(
    form: web::Form<EmailForm>,
    backend: web::Data<BackendClient>,
) -> HttpResponse {
    let mut page = UnsubscribePage::new(form.into_inner().email);

    let address = match page.begin_submit() {
        Ok(address) => address.to_owned(),
        Err(e) => {
            tracing::info!(error = %e, "Unsubscribe form rejected");
            return respond(HttpResponse::BadRequest(), &page);
        }
    };

    let outcome = backend.unsubscribe(&address).await;
    page.settle(outcome);

    match page.status() {
        UnsubscribeStatus::Success => respond(HttpResponse::Ok(), &page),
        _ => respond(HttpResponse::BadGateway(), &page),
    }
}
