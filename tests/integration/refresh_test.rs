// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, StubTransport};
use serverload::domain::models::target::TargetField;
use std::sync::Arc;

const LOAD_URL: &str = "http://x.test/load";

#[tokio::test]
async fn test_refresh_composes_value_and_label() {
    let transport = Arc::new(StubTransport::new());
    transport.respond(LOAD_URL, 200, "42");
    let app = create_test_app(transport.clone(), true);

    app.store.save(7, TargetField::Url, LOAD_URL).await.unwrap();
    app.store.save(7, TargetField::Label, "Web1").await.unwrap();

    let update = app.refresher.refresh(7).await;
    assert_eq!(update.target_id, 7);
    assert_eq!(update.value, "42%");
    assert_eq!(update.label, "Web1");
    assert_eq!(transport.requests(), vec![LOAD_URL.to_string()]);

    // refresh() alone does not render
    assert!(app.renderer.updates().is_empty());
}

#[tokio::test]
async fn test_refresh_server_error_yields_bare_suffix() {
    let transport = Arc::new(StubTransport::new());
    transport.respond(LOAD_URL, 500, "Internal Server Error");
    let app = create_test_app(transport, true);

    app.store.save(7, TargetField::Url, LOAD_URL).await.unwrap();
    app.store.save(7, TargetField::Label, "Web1").await.unwrap();

    let update = app.refresher.refresh_and_render(7).await;
    assert_eq!(update.value, "%");
    assert_eq!(update.label, "Web1");
    assert_eq!(app.renderer.updates(), vec![update]);
}

#[tokio::test]
async fn test_refresh_unconfigured_target_is_silent() {
    let transport = Arc::new(StubTransport::new());
    let app = create_test_app(transport, true);

    let update = app.refresher.refresh_and_render(3).await;
    assert_eq!(update.value, "%");
    assert_eq!(update.label, "");
}

#[tokio::test]
async fn test_refresh_all_renders_every_target() {
    let transport = Arc::new(StubTransport::new());
    transport.respond("http://a.test/load", 200, "10");
    transport.respond("http://b.test/load", 200, "20");
    let app = create_test_app(transport, true);

    app.store.save(2, TargetField::Url, "http://b.test/load").await.unwrap();
    app.store.save(2, TargetField::Label, "B").await.unwrap();
    app.store.save(1, TargetField::Url, "http://a.test/load").await.unwrap();
    app.store.save(1, TargetField::Label, "A").await.unwrap();

    assert_eq!(app.refresher.refresh_all().await, 2);

    let rendered: Vec<(u32, String, String)> = app
        .renderer
        .updates()
        .into_iter()
        .map(|u| (u.target_id, u.value, u.label))
        .collect();
    assert_eq!(
        rendered,
        vec![
            (1, "10%".to_string(), "A".to_string()),
            (2, "20%".to_string(), "B".to_string()),
        ]
    );
}
