// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use serverload::domain::models::target::TargetField;
use serverload::engines::fetcher::{FetchGate, Fetcher};
use serverload::engines::reqwest_engine::ReqwestEngine;
use std::collections::HashMap;
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_save_and_refresh_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/load"))
        .and(header("user-agent", "serverload-test"))
        .respond_with(ResponseTemplate::new(200).set_body_string("73"))
        .mount(&server)
        .await;

    let transport = Arc::new(ReqwestEngine::new("serverload-test").unwrap());
    let app = create_test_app(transport, true);
    let url = format!("{}/load", server.uri());

    let update = app
        .config_service
        .save_target(5, &url, "db-01")
        .await
        .unwrap();

    assert_eq!(update.value, "73%");
    assert_eq!(update.label, "db-01");
    assert_eq!(app.store.load(5, TargetField::Url).await, url);
}

#[tokio::test]
async fn test_http_error_status_is_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/load"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let transport = Arc::new(ReqwestEngine::new("serverload-test").unwrap());
    let app = create_test_app(transport, true);

    let err = app
        .config_service
        .save_target(5, &format!("{}/load", server.uri()), "db-01")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "UNREACHABLE_URL");
    assert!(app.repository.is_empty());
}

#[tokio::test]
async fn test_background_refresh_after_server_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/load"))
        .respond_with(ResponseTemplate::new(200).set_body_string("12"))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/load"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let transport = Arc::new(ReqwestEngine::new("serverload-test").unwrap());
    let app = create_test_app(transport, true);

    let saved = app
        .config_service
        .save_target(5, &format!("{}/load", server.uri()), "db-01")
        .await
        .unwrap();
    assert_eq!(saved.value, "12%");

    let refreshed = app.refresher.refresh_and_render(5).await;
    assert_eq!(refreshed.value, "%");
    assert_eq!(refreshed.label, "db-01");
}

#[tokio::test]
async fn test_configured_headers_reach_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/load"))
        .and(header("x-api-key", "secret"))
        .and(header("user-agent", "serverload-test"))
        .respond_with(ResponseTemplate::new(200).set_body_string("12"))
        .expect(1)
        .mount(&server)
        .await;

    let transport = Arc::new(ReqwestEngine::new("serverload-test").unwrap());
    let fetcher = Fetcher::with_gate(transport.clone(), FetchGate::new()).with_headers(
        HashMap::from([("x-api-key".to_string(), "secret".to_string())]),
    );
    let without_headers = Fetcher::with_gate(transport, FetchGate::new());
    let url = format!("{}/load", server.uri());

    let result = fetcher.fetch(&url).await;
    assert!(result.succeeded);
    assert_eq!(result.body, "12");

    // No matching mock without the header: wiremock answers 404
    assert!(!without_headers.fetch(&url).await.succeeded);
}
