// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;
use tracing::info;

/// 初始化指标系统
///
/// 安装全局 Prometheus 记录器并注册上游调用相关指标，
/// 返回的句柄由 `/metrics` 端点渲染
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(
        "upstream_requests_total",
        "Total number of requests sent to upstream providers"
    );
    describe_counter!(
        "upstream_failures_total",
        "Total number of upstream requests that failed"
    );
    describe_histogram!(
        "upstream_request_duration_seconds",
        "Duration of upstream requests in seconds"
    );

    info!("Prometheus recorder installed");
    Ok(handle)
}

/// 记录一次上游调用
pub fn record_upstream_request(provider: &'static str, elapsed: Duration, success: bool) {
    counter!("upstream_requests_total", "provider" => provider).increment(1);
    histogram!("upstream_request_duration_seconds", "provider" => provider)
        .record(elapsed.as_secs_f64());
    if !success {
        counter!("upstream_failures_total", "provider" => provider).increment(1);
    }
}
