// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::fetch_result::FetchResult;
use crate::engines::traits::{FetchRequest, HttpTransport};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// 成功的HTTP状态码，其他状态码一律视为失败
const HTTP_OK: u16 = 200;

/// 进程级抓取锁
static PROCESS_FETCH_GATE: Lazy<FetchGate> = Lazy::new(FetchGate::new);

/// 抓取锁
///
/// 容量为 1 的信号量，持有同一个锁的所有抓取器互斥执行
#[derive(Clone, Debug)]
pub struct FetchGate {
    semaphore: Arc<Semaphore>,
}

impl FetchGate {
    /// 创建一个独立的抓取锁
    pub fn new() -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(1)),
        }
    }

    /// 进程内共享的抓取锁
    pub fn process() -> Self {
        PROCESS_FETCH_GATE.clone()
    }

    /// 当前是否有抓取持有该锁
    pub fn is_held(&self) -> bool {
        self.semaphore.available_permits() == 0
    }
}

impl Default for FetchGate {
    fn default() -> Self {
        Self::new()
    }
}

/// 抓取器
///
/// 对传输层做一次 GET 并把结果折叠为 [`FetchResult`]。
/// 默认使用进程级抓取锁，因此无论创建多少个抓取器、配置了多少目标，
/// 同一时刻最多只有一个抓取在进行。
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn HttpTransport>,
    gate: FetchGate,
    timeout: Option<Duration>,
    headers: HashMap<String, String>,
}

impl Fetcher {
    /// 创建使用进程级抓取锁的抓取器
    ///
    /// # 参数
    ///
    /// * `transport` - HTTP 传输实现
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_gate(transport, FetchGate::process())
    }

    /// 创建使用指定抓取锁的抓取器
    ///
    /// # 参数
    ///
    /// * `transport` - HTTP 传输实现
    /// * `gate` - 与其他抓取器共享的抓取锁
    pub fn with_gate(transport: Arc<dyn HttpTransport>, gate: FetchGate) -> Self {
        Self {
            transport,
            gate,
            timeout: None,
            headers: HashMap::new(),
        }
    }

    /// 设置请求超时，`None` 使用传输层默认值
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// 设置每次请求附带的额外请求头
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// 抓取URL的原始文本内容
    ///
    /// 连接错误、读取错误、超时以及非 200 状态码都返回
    /// `FetchResult { succeeded: false, body: "" }`，不重试。
    ///
    /// # 参数
    ///
    /// * `url` - 请求的完整URL
    pub async fn fetch(&self, url: &str) -> FetchResult {
        let _permit = match self.gate.semaphore.acquire().await {
            Ok(permit) => permit,
            Err(e) => {
                warn!("Fetch gate closed: {}", e);
                return FetchResult::failure();
            }
        };

        debug!("opening: {} via {}", url, self.transport.name());
        let request = FetchRequest::get(url, self.timeout).with_headers(self.headers.clone());
        let outcome = self.transport.get(&request).await;

        match outcome {
            Ok(response) => {
                metrics::histogram!("serverload_fetch_duration_seconds")
                    .record(response.response_time_ms as f64 / 1000.0);

                if response.status_code == HTTP_OK {
                    metrics::counter!("serverload_fetch_total", "outcome" => "success")
                        .increment(1);
                    FetchResult::success(response.content)
                } else {
                    debug!(
                        "Invalid response from server {}: status {}",
                        url, response.status_code
                    );
                    metrics::counter!("serverload_fetch_total", "outcome" => "bad_status")
                        .increment(1);
                    FetchResult::failure()
                }
            }
            Err(e) => {
                debug!("Problem communicating with {}: {}", url, e);
                metrics::counter!("serverload_fetch_total", "outcome" => "error").increment(1);
                FetchResult::failure()
            }
        }
    }

    /// 当前是否有抓取正在进行
    pub fn is_busy(&self) -> bool {
        self.gate.is_held()
    }
}
