// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use url::Url;

/// 验证错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// URL无法解析
    #[error("Malformed URL: {0}")]
    Malformed(String),
    /// 不支持的协议
    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),
    /// 缺少主机名
    #[error("Missing host")]
    MissingHost,
}

/// 验证 URL 是否为语法正确的绝对 HTTP(S) 地址
///
/// 只做语法检查，不进行任何网络 I/O
pub fn validate_url(url_str: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(url_str).map_err(|e| ValidationError::Malformed(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(ValidationError::UnsupportedScheme(other.to_string())),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(ValidationError::MissingHost),
    }
}
