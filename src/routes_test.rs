use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("vizai")
        .site_root("target/site-test")
        .build()
}

async fn get_page(path: &str) -> (StatusCode, String) {
    let response = app(test_options())
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, _) = get_page("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn home_renders() {
    let (status, body) = get_page("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/register-analyse"), "home links to sign-in: {body}");
}

#[tokio::test]
async fn register_analyse_renders_sign_in_form() {
    let (status, body) = get_page("/register-analyse").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sign in to VizAI"));
    assert!(body.contains("Email/Username"));
    assert!(body.contains("href=\"/register\""));
    assert!(body.contains("Assistant:"));
    assert!(!body.contains("role=\"dialog\""), "help is hidden until requested");
    assert!(!body.contains("role=\"alert\""), "no errors before submit");
}

#[tokio::test]
async fn unknown_path_renders_fallback_with_home_link() {
    let (status, body) = get_page("/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Not Found"));
    assert!(body.contains("href=\"/\""));
}
