// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 提供偏好存储后端和指标导出等外部集成
pub mod metrics;
pub mod storage;
