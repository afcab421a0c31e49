// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：目标、抓取结果、显示内容和宿主事件
/// - 仓库接口（repositories）：偏好存储抽象接口
/// - 服务（services）：配置存储、保存校验和刷新编排
///
/// 领域层不依赖于宿主环境和具体存储技术。
pub mod models;
pub mod repositories;
pub mod services;
