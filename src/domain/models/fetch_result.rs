// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取结果
///
/// 瞬时值，不做持久化。每次抓取相互独立，没有重试计数和缓存。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchResult {
    /// 成功时的响应文本，失败时为空
    pub body: String,
    /// 是否成功（HTTP 200）
    pub succeeded: bool,
}

impl FetchResult {
    pub fn success(body: String) -> Self {
        Self {
            body,
            succeeded: true,
        }
    }

    pub fn failure() -> Self {
        Self::default()
    }
}
