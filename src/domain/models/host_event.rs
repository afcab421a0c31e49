// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::target::TargetId;

/// 宿主环境触发事件
///
/// 宿主的生命周期回调（创建、周期更新、删除、启用、停用）
/// 在这里统一建模为外部事件，核心逻辑不感知具体宿主。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// 刷新指定目标
    Refresh(Vec<TargetId>),
    /// 指定目标已被移除
    Removed(Vec<TargetId>),
    /// 第一个目标被创建，可以启动后台刷新
    Enabled,
    /// 所有目标都已移除，停止后台刷新
    Disabled,
}
