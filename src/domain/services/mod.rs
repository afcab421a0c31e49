// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 配置存储（config_store）：按目标读写URL和标签
/// - 配置服务（config_service）：保存前的校验流程
/// - 刷新服务（refresh_service）：单个目标的刷新周期
/// - 渲染特质（renderer）：外部渲染协作方的接口
pub mod config_service;
pub mod config_store;
pub mod refresh_service;
pub mod renderer;
