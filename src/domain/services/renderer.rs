// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::display::DisplayUpdate;
use async_trait::async_trait;

/// 渲染协作方特质
///
/// 负责把显示内容呈现出来；核心逻辑从不接触具体的展示方式。
/// 渲染方可以自行决定是否忽略空值更新。
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, update: &DisplayUpdate);
}
