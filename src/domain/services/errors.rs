// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 领域服务错误
///
/// 上游错误在服务内部记录日志后被替换为面向调用方的通用消息
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("{0}")]
    Upstream(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
}
