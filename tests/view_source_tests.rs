//! Raw-source fetch behavior against a local mock server

use std::time::Duration;

use tagcheck::view_source::{build_client, fetch_view_source};

fn client() -> reqwest::Client {
    build_client(Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn successful_fetch_returns_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body("<html><head>GTM-ABC</head></html>")
        .create_async()
        .await;

    let body = fetch_view_source(&client(), &server.url(), Duration::from_secs(2)).await;
    assert_eq!(body.as_deref(), Some("<html><head>GTM-ABC</head></html>"));
}

#[tokio::test]
async fn non_success_status_still_returns_body() {
    // A 500 error page can still carry the marker; the body is what counts.
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(500)
        .with_body("server error page")
        .create_async()
        .await;

    let body = fetch_view_source(&client(), &server.url(), Duration::from_secs(2)).await;
    assert_eq!(body.as_deref(), Some("server error page"));
}

#[tokio::test]
async fn connection_failure_returns_none() {
    // Port from a server that has been dropped, so nothing is listening.
    let url = {
        let server = mockito::Server::new_async().await;
        server.url()
    };

    let body = fetch_view_source(&client(), &url, Duration::from_secs(1)).await;
    assert!(body.is_none());
}

#[tokio::test]
async fn invalid_bytes_are_decoded_lossily() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(b"tag: GTM-ABC \xff\xfe end".to_vec())
        .create_async()
        .await;

    let body = fetch_view_source(&client(), &server.url(), Duration::from_secs(2)).await;
    let body = body.unwrap();
    assert!(body.contains("GTM-ABC"));
    assert!(body.contains('\u{fffd}'));
}
