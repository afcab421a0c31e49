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

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 抓取请求
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// 请求头
    pub headers: HashMap<String, String>,
    /// 超时时间，`None` 表示使用传输层默认值
    pub timeout: Option<Duration>,
}

impl FetchRequest {
    /// 创建一个使用默认请求头的 GET 请求
    pub fn get(url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            timeout,
        }
    }

    /// 附加额外请求头
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

/// 抓取响应
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应内容（已按响应字符集解码，默认UTF-8）
    pub content: String,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// HTTP 传输特质
///
/// 执行一次阻塞式（等待完整响应体）的 GET 请求。
/// 非 200 状态码不视为传输错误，由调用方判断。
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// 执行请求
    async fn get(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError>;

    /// 传输名称
    fn name(&self) -> &'static str;
}
