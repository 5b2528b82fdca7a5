//! tests/api/unsubscribe.rs

use crate::helpers::{setup, setup_with_unreachable_backend};
use wiremock::{
    matchers::{any, body_json, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn unsubscribe_page_renders_an_idle_form() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.get("/unsubscribe").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("We&apos;re sad to see you go!"));
    assert!(html.contains(r#"<button type="submit">Unsubscribe</button>"#));
}

#[tokio::test]
async fn unsubscribe_forwards_the_address_and_confirms() {
    // Arrange
    let test = setup().await;

    Mock::given(method("POST"))
        .and(path("/unsubscribe"))
        .and(body_json(serde_json::json!({ "address": "ursula@example.com" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test.backend_server)
        .await;

    // Act
    let response = test.unsubscribe("ursula@example.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"class="status success""#));
    assert!(html.contains("You have been successfully unsubscribed."));
}

#[tokio::test]
async fn unsubscribe_reports_an_error_when_the_backend_fails() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({ "message": "ignored" })),
        )
        .expect(1)
        .mount(&test.backend_server)
        .await;

    // Act
    let response = test.unsubscribe("ursula@example.com").await;

    // Assert
    assert_eq!(502, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"class="status error""#));
    assert!(html.contains("An error occurred. Please try again."));
    assert!(!html.contains("ignored"));
}

#[tokio::test]
async fn unsubscribe_reports_an_error_when_the_backend_is_unreachable() {
    // Arrange
    let test = setup_with_unreachable_backend().await;

    // Act
    let response = test.unsubscribe("ursula@example.com").await;

    // Assert
    assert_eq!(502, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("An error occurred. Please try again."));
}

#[tokio::test]
async fn unsubscribe_does_not_validate_the_address_shape() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test.backend_server)
        .await;

    // Act
    let response = test.unsubscribe("ursula").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn unsubscribe_requires_an_address() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.backend_server)
        .await;

    // Act
    let response = test.unsubscribe("").await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(!html.contains(r#"class="status"#));
}
