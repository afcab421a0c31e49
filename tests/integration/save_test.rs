// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, StubTransport};
use serverload::domain::models::target::{Target, TargetField};
use serverload::utils::errors::ConfigError;
use std::sync::Arc;

const LOAD_URL: &str = "http://x.test/load";

#[tokio::test]
async fn test_save_rejects_invalid_urls_without_io() {
    let transport = Arc::new(StubTransport::new());
    let app = create_test_app(transport.clone(), true);

    for url in ["", "x.test/load", "not a url", "ftp://x.test/load", "http://"] {
        let result = app.config_service.save_target(7, url, "Web1").await;
        assert!(
            matches!(result, Err(ConfigError::InvalidUrl(_))),
            "{:?} should be rejected",
            url
        );
    }

    assert!(transport.requests().is_empty());
    assert!(app.repository.is_empty());
}

#[tokio::test]
async fn test_save_rejects_unreachable_url() {
    let transport = Arc::new(StubTransport::new());
    transport.respond(LOAD_URL, 503, "busy");
    let app = create_test_app(transport, true);

    let err = app
        .config_service
        .save_target(7, LOAD_URL, "Web1")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "UNREACHABLE_URL");
    assert!(app.repository.is_empty());
    assert!(app.renderer.updates().is_empty());
}

#[tokio::test]
async fn test_failed_save_keeps_previous_configuration() {
    let transport = Arc::new(StubTransport::new());
    transport.respond(LOAD_URL, 200, "42");
    let app = create_test_app(transport, true);

    app.config_service
        .save_target(7, LOAD_URL, "Web1")
        .await
        .unwrap();
    let result = app
        .config_service
        .save_target(7, "http://down.test/load", "Renamed")
        .await;

    assert!(matches!(result, Err(ConfigError::UnreachableUrl(_))));
    assert_eq!(app.store.load_target(7).await, Target::new(7, LOAD_URL, "Web1"));
}

#[tokio::test]
async fn test_save_persists_and_renders() {
    let transport = Arc::new(StubTransport::new());
    transport.respond(LOAD_URL, 200, "42");
    let app = create_test_app(transport.clone(), true);

    let update = app
        .config_service
        .save_target(7, LOAD_URL, "Web1")
        .await
        .unwrap();

    assert_eq!(update.value, "42%");
    assert_eq!(update.label, "Web1");
    assert_eq!(app.store.load(7, TargetField::Url).await, LOAD_URL);
    assert_eq!(app.store.load(7, TargetField::Label).await, "Web1");
    assert_eq!(app.renderer.updates(), vec![update]);

    // One fetch for validation, one for the immediate refresh
    assert_eq!(transport.requests().len(), 2);

    let refreshed = app.refresher.refresh(7).await;
    assert_eq!(refreshed.value, "42%");
}

#[tokio::test]
async fn test_soft_reachability_saves_anyway() {
    let transport = Arc::new(StubTransport::new());
    let app = create_test_app(transport, false);

    let update = app
        .config_service
        .save_target(4, "http://offline.test/load", "Offline")
        .await
        .unwrap();

    assert_eq!(update.value, "%");
    assert_eq!(
        app.store.load_target(4).await,
        Target::new(4, "http://offline.test/load", "Offline")
    );
}

#[tokio::test]
async fn test_soft_reachability_still_checks_syntax() {
    let transport = Arc::new(StubTransport::new());
    let app = create_test_app(transport, false);

    let err = app
        .config_service
        .save_target(4, "offline", "Offline")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "INVALID_URL");
    assert!(app.repository.is_empty());
}

#[tokio::test]
async fn test_invalid_target_id() {
    let transport = Arc::new(StubTransport::new());
    transport.respond(LOAD_URL, 200, "42");
    let app = create_test_app(transport, true);

    assert!(matches!(
        app.config_service.save_target(0, LOAD_URL, "x").await,
        Err(ConfigError::InvalidTarget(0))
    ));
    assert!(app.config_service.edit_target(0).await.is_err());
}

#[tokio::test]
async fn test_edit_target_prefills_stored_values() {
    let transport = Arc::new(StubTransport::new());
    transport.respond(LOAD_URL, 200, "42");
    let app = create_test_app(transport, true);

    assert_eq!(
        app.config_service.edit_target(7).await.unwrap(),
        Target::new(7, "", "")
    );

    app.config_service
        .save_target(7, LOAD_URL, "Web1")
        .await
        .unwrap();
    assert_eq!(
        app.config_service.edit_target(7).await.unwrap(),
        Target::new(7, LOAD_URL, "Web1")
    );
}
