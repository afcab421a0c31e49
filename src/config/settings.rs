// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含抓取、存储、刷新、校验和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 抓取配置
    pub fetcher: FetcherSettings,
    /// 存储配置
    pub storage: StorageSettings,
    /// 周期刷新配置
    pub refresh: RefreshSettings,
    /// 保存校验配置
    pub validation: ValidationSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
    /// 启动时写入的目标列表
    #[serde(default)]
    pub targets: Vec<TargetSeed>,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherSettings {
    /// 请求超时时间（秒），未设置时使用传输层默认值
    pub timeout_secs: Option<u64>,
    /// User-Agent 请求头
    pub user_agent: String,
    /// 每次请求附带的额外请求头
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl FetcherSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 存储类型 (memory, local)
    pub storage_type: String,
    /// 本地存储路径 (当 type=local 时使用)
    pub local_path: Option<String>,
}

/// 周期刷新配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshSettings {
    /// 刷新间隔（秒）
    pub interval_secs: u64,
}

impl RefreshSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

/// 保存校验配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationSettings {
    /// 保存时 URL 必须可达，否则拒绝保存；为 false 时仅记录警告
    pub require_reachable: bool,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

/// 启动时预置的目标配置
#[derive(Debug, Clone, Deserialize)]
pub struct TargetSeed {
    pub id: u32,
    pub url: String,
    #[serde(default)]
    pub label: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `SERVERLOAD__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SERVERLOAD").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 仅使用内置默认值构建配置（不读取文件和环境变量）
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Default fetcher settings
            .set_default("fetcher.user_agent", "serverload/0.1")?
            // Default Storage settings
            .set_default("storage.storage_type", "local")?
            .set_default("storage.local_path", "./storage")?
            // Default refresh settings
            .set_default("refresh.interval_secs", 1800)?
            .set_default("validation.require_reachable", true)?
            // Default metrics settings
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
