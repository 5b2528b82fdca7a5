//! src/routes/unsubscribe/mod.rs
use super::layout::document;
use crate::domain::{UnsubscribePage, UnsubscribeStatus};
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, HttpResponseBuilder};
use htmlescape::encode_minimal;

mod get;
pub use get::*;

mod post;
pub use post::*;

const SCRIPT: &str = r#"
(() => {
    const form = document.getElementById("unsubscribe");
    const button = form.querySelector("button[type=submit]");
    form.addEventListener("submit", (event) => {
        if (button.disabled) {
            event.preventDefault();
            return;
        }
        button.disabled = true;
        button.textContent = "Processing...";
    });
})();
"#;

fn respond(mut builder: HttpResponseBuilder, page: &UnsubscribePage) -> HttpResponse {
    builder.content_type(ContentType::html()).body(render(page))
}

fn render(page: &UnsubscribePage) -> String {
    let email = encode_minimal(page.email());
    let disabled = if page.submit_disabled() { " disabled" } else { "" };
    let label = if page.status() == UnsubscribeStatus::Loading {
        "Processing..."
    } else {
        "Unsubscribe"
    };
    let status_html = match (page.status(), page.message()) {
        (UnsubscribeStatus::Success, Some(message)) => {
            format!(r#"<div class="status success"><span>&#10004;</span><p>{message}</p></div>"#)
        }
        (UnsubscribeStatus::Error, Some(message)) => {
            format!(r#"<div class="status error"><span>&#9888;</span><p>{message}</p></div>"#)
        }
        _ => String::new(),
    };

    let body = format!(
        r#"<main class="screen">
    <div class="column">
        <div class="card">
            <h1>We&apos;re sad to see you go! 😔</h1>
            <p class="muted">Enter your email address below to unsubscribe from 2words.</p>
            <form id="unsubscribe" action="/unsubscribe" method="post">
                <input type="email" name="email" placeholder="Enter your email" value="{email}" required>
                <button type="submit"{disabled}>{label}</button>
            </form>
            {status_html}
        </div>
    </div>
</main>"#
    );

    document("Unsubscribe from 2Words", &body, SCRIPT)
}
