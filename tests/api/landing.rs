//! tests/api/landing.rs

use crate::helpers::{setup, setup_with_unreachable_backend};
use wiremock::{
    matchers::{any, body_json, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn landing_page_renders_the_signup_form() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.get("/").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Level Up Your Vocab Game!"));
    assert!(html.contains(r#"<button type="submit" disabled>Let's Go! 🚀</button>"#));
    assert!(html.contains("Ephemeral"));
    assert!(html.contains("Serendipity"));
}

#[tokio::test]
async fn signup_forwards_the_address_to_the_backend_once() {
    // Arrange
    let test = setup().await;

    Mock::given(method("POST"))
        .and(path("/receive-email"))
        .and(body_json(serde_json::json!({ "address": "user@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "message": "ok" })))
        .expect(1)
        .mount(&test.backend_server)
        .await;

    // Act
    let response = test.signup("user@example.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn signup_shows_the_backend_message_with_confetti_and_popup() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "message": "ok" })))
        .expect(1)
        .mount(&test.backend_server)
        .await;

    // Act
    let response = test.signup("user@example.com").await;

    // Assert
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<p class="message">ok</p>"#));
    assert!(html.contains(r#"id="confetti""#));
    assert!(html.contains(r#"data-remaining-ms=""#));
    assert!(html.contains(r#"<dialog id="welcome">"#));
    assert!(html.contains("An email 📧 will be sent to you at 8 AM ⏰ IST everyday!"));
    // Loading is over and the address is still valid.
    assert!(html.contains(r#"<button type="submit">Let's Go! 🚀</button>"#));
}

#[tokio::test]
async fn signup_falls_back_to_a_generic_success_message() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&test.backend_server)
        .await;

    // Act
    let response = test.signup("user@example.com").await;

    // Assert
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<p class="message">Success!</p>"#));
}

#[tokio::test]
async fn signup_with_a_backend_error_message_still_opens_the_popup() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({ "message": "Failed to save email" })),
        )
        .expect(1)
        .mount(&test.backend_server)
        .await;

    // Act
    let response = test.signup("user@example.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<p class="message">Failed to save email</p>"#));
    assert!(html.contains(r#"<dialog id="welcome">"#));
}

#[tokio::test]
async fn signup_rejects_invalid_addresses_without_calling_the_backend() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.backend_server)
        .await;

    for email in ["a@b", "a.com", "@b.com", "", "user@example.c"] {
        // Act
        let response = test.signup(email).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The app did not fail with 400 Bad Request when the email was {:?}.",
            email
        );
        let html = response.text().await.unwrap();
        assert!(html.contains("Please enter a valid email address!"));
        assert!(html.contains(r#"<button type="submit" disabled>"#));
    }
}

#[tokio::test]
async fn signup_returns_a_400_when_the_email_field_is_missing() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.post_form("/", "name=le%20guin").await;

    // Assert
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn signup_shows_a_generic_error_when_the_reply_is_not_json() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&test.backend_server)
        .await;

    // Act
    let response = test.signup("user@example.com").await;

    // Assert
    assert_eq!(502, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Something went wrong. Please try again later."));
    assert!(!html.contains("<dialog"));
    assert!(!html.contains(r#"id="confetti""#));
}

#[tokio::test]
async fn signup_shows_a_generic_error_when_the_backend_is_unreachable() {
    // Arrange
    let test = setup_with_unreachable_backend().await;

    // Act
    let response = test.signup("user@example.com").await;

    // Assert
    assert_eq!(502, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<p class="message">Something went wrong. Please try again later.</p>"#));
    assert!(html.contains(r#"<button type="submit">Let's Go! 🚀</button>"#));
}

#[tokio::test]
async fn signup_shows_a_generic_error_when_the_reply_is_null() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_raw("null", "application/json"))
        .expect(1)
        .mount(&test.backend_server)
        .await;

    // Act
    let response = test.signup("user@example.com").await;

    // Assert
    assert_eq!(502, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<p class="message">Something went wrong. Please try again later.</p>"#));
    assert!(!html.contains(r#"<dialog id="welcome""#));
    assert!(!html.contains(r#"id="confetti""#));
}
