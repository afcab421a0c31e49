// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serverload::application::dispatcher::TriggerDispatcher;
use serverload::config::settings::{Settings, StorageSettings};
use serverload::domain::models::host_event::HostEvent;
use serverload::domain::repositories::preference_repository::PreferenceRepository;
use serverload::domain::services::config_service::ConfigService;
use serverload::domain::services::config_store::ConfigStore;
use serverload::domain::services::refresh_service::RefreshService;
use serverload::engines::fetcher::Fetcher;
use serverload::engines::reqwest_engine::ReqwestEngine;
use serverload::infrastructure::metrics::init_metrics;
use serverload::infrastructure::storage::{LocalPreferenceStore, MemoryPreferenceStore};
use serverload::presentation::renderer::LogRenderer;
use serverload::utils::telemetry;
use serverload::workers::manager::WorkerManager;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// 主函数
///
/// 充当宿主环境：加载配置、写入预置目标、启动后台刷新直到收到 Ctrl-C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting serverload...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    init_metrics(&settings.metrics);

    // 3. Storage
    let repository = create_repository(&settings.storage)?;
    let store = ConfigStore::new(repository);

    // 4. Fetch path
    let transport = Arc::new(ReqwestEngine::new(&settings.fetcher.user_agent)?);
    let fetcher = Fetcher::new(transport)
        .with_timeout(settings.fetcher.timeout())
        .with_headers(settings.fetcher.headers.clone());

    // 5. Services
    let refresher = Arc::new(RefreshService::new(
        store.clone(),
        fetcher.clone(),
        Arc::new(LogRenderer),
    ));
    let config_service = ConfigService::new(
        store,
        fetcher,
        refresher.clone(),
        settings.validation.require_reachable,
    );

    // 6. Seed targets through the validated save path
    for seed in &settings.targets {
        match config_service
            .save_target(seed.id, &seed.url, &seed.label)
            .await
        {
            Ok(update) => info!("Target {} configured: {}", seed.id, update.value),
            Err(e) => warn!(kind = e.kind(), "Target {} rejected: {}", seed.id, e),
        }
    }

    // 7. Dispatch host events
    let workers = WorkerManager::new(refresher.clone(), settings.refresh.interval());
    let dispatcher = Arc::new(TriggerDispatcher::new(refresher, workers));
    let (events, receiver) = mpsc::channel(16);
    let run_dispatcher = dispatcher.clone();
    let dispatch_handle = tokio::spawn(async move { run_dispatcher.run(receiver).await });

    events.send(HostEvent::Enabled).await?;
    info!(
        "Background refresh every {}s",
        settings.refresh.interval().as_secs()
    );

    signal::ctrl_c().await?;
    info!("Shutdown signal received");

    events.send(HostEvent::Disabled).await?;
    drop(events);
    dispatch_handle.await?;

    info!("serverload stopped");
    Ok(())
}

fn create_repository(settings: &StorageSettings) -> anyhow::Result<Arc<dyn PreferenceRepository>> {
    match settings.storage_type.as_str() {
        "memory" => Ok(Arc::new(MemoryPreferenceStore::new())),
        "local" => {
            let path = settings
                .local_path
                .clone()
                .unwrap_or_else(|| "storage".to_string());
            info!("Using local preference storage at {}", path);
            Ok(Arc::new(LocalPreferenceStore::new(path)))
        }
        other => anyhow::bail!("Unsupported storage type: {}", other),
    }
}
