// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::display::DisplayUpdate;
use crate::domain::services::renderer::Renderer;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// 日志渲染器
///
/// 把显示内容写入结构化日志，供无界面运行时使用
#[derive(Debug, Default, Clone)]
pub struct LogRenderer;

#[async_trait]
impl Renderer for LogRenderer {
    async fn render(&self, update: &DisplayUpdate) {
        info!(
            target_id = update.target_id,
            value = %update.value,
            label = %update.label,
            "display updated"
        );
    }
}

/// 通道渲染器
///
/// 把显示内容转发给嵌入方持有的接收端
#[derive(Debug, Clone)]
pub struct ChannelRenderer {
    sender: mpsc::UnboundedSender<DisplayUpdate>,
}

impl ChannelRenderer {
    /// 创建渲染器及其对应的接收端
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DisplayUpdate>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl Renderer for ChannelRenderer {
    async fn render(&self, update: &DisplayUpdate) {
        if self.sender.send(update.clone()).is_err() {
            warn!(
                "Display receiver dropped, discarding update for target {}",
                update.target_id
            );
        }
    }
}
