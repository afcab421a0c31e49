// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::refresh_service::RefreshService;
use crate::utils::errors::WorkerError;
use crate::workers::worker::Worker;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

/// 周期刷新工作器
///
/// 每个周期依次刷新所有已配置的目标；第一个周期立即执行
pub struct RefreshWorker {
    refresher: Arc<RefreshService>,
    period: Duration,
}

impl RefreshWorker {
    pub fn new(refresher: Arc<RefreshService>, period: Duration) -> Self {
        Self { refresher, period }
    }
}

#[async_trait]
impl Worker for RefreshWorker {
    async fn run(&self) -> Result<(), WorkerError> {
        if self.period.is_zero() {
            return Err(WorkerError::ConfigurationError(
                "refresh interval must be positive".to_string(),
            ));
        }

        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let count = self.refresher.refresh_all().await;
            debug!("Refresh tick completed for {} targets", count);
        }
    }

    fn name(&self) -> &str {
        "refresh_worker"
    }
}
