// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::fetch_result::FetchResult;
use super::target::TargetId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 显示值后缀
pub const DISPLAY_SUFFIX: &str = "%";

/// 显示更新
///
/// 一次刷新周期的输出，交给外部渲染协作方。
/// 失败的抓取不会区分错误状态，只会得到空值加后缀。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUpdate {
    /// 目标ID
    pub target_id: TargetId,
    /// 显示值，即响应文本加 `%` 后缀
    pub value: String,
    /// 显示标签，原样使用
    pub label: String,
    /// 生成时间
    pub refreshed_at: DateTime<Utc>,
}

impl DisplayUpdate {
    /// 根据抓取结果和标签组合显示内容
    pub fn compose(target_id: TargetId, result: &FetchResult, label: String) -> Self {
        Self {
            target_id,
            value: format!("{}{}", result.body, DISPLAY_SUFFIX),
            label,
            refreshed_at: Utc::now(),
        }
    }
}
