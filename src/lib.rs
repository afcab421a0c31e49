// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 宿主事件的分发
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、服务和仓库接口
pub mod domain;

/// 引擎模块
///
/// HTTP 传输、抓取器和 URL 校验
pub mod engines;

/// 基础设施模块
///
/// 提供偏好存储后端和指标导出
pub mod infrastructure;

/// 表示层模块
///
/// 渲染协作方的实现
pub mod presentation;

/// 工具模块
///
/// 提供错误类型和遥测初始化
pub mod utils;

/// 工作器模块
///
/// 实现后台周期刷新和工作器管理
pub mod workers;
