// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 未设置 `RUST_LOG` 时使用的日志过滤规则
pub const DEFAULT_LOG_FILTER: &str = "info,siftrs=debug,tower_http=debug";

/// 初始化日志
///
/// 优先读取 `RUST_LOG`，否则使用 [`DEFAULT_LOG_FILTER`]
pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(default_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}
