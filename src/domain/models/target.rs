// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 目标ID，由宿主环境分配
pub type TargetId = u32;

/// 宿主环境用来表示"无效目标"的保留ID
pub const INVALID_TARGET_ID: TargetId = 0;

/// 目标实体
///
/// 表示一个已配置的显示实例，包含抓取地址和显示标签。
/// 保存会完整覆盖同一ID下的旧值，不保留历史版本。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// 目标唯一标识符
    pub id: TargetId,
    /// 抓取数值的URL
    pub url: String,
    /// 显示标签，可以为空
    pub label: String,
}

impl Target {
    pub fn new(id: TargetId, url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            label: label.into(),
        }
    }
}

/// 目标的持久化字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetField {
    Url,
    Label,
}

impl TargetField {
    /// 所有持久化字段
    pub const ALL: [TargetField; 2] = [TargetField::Url, TargetField::Label];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetField::Url => "url",
            TargetField::Label => "label",
        }
    }
}

impl fmt::Display for TargetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
