// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HttpSettings;
use crate::domain::search::engine::SearchError;
use crate::infrastructure::metrics::record_upstream_request;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, warn};

/// 构建共享的上游HTTP客户端
///
/// 不设置请求超时，网络错误直接返回给调用方
pub fn build_client(settings: &HttpSettings) -> Result<Client, SearchError> {
    Client::builder()
        .user_agent(settings.user_agent.as_str())
        .build()
        .map_err(|e| SearchError::ConfigError(format!("Failed to create HTTP client: {}", e)))
}

/// 发送请求，非 2xx 状态视为失败
async fn send(request: RequestBuilder, provider: &'static str) -> Result<Response, SearchError> {
    let started = Instant::now();
    let result = request.send().await;

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            record_upstream_request(provider, started.elapsed(), false);
            warn!(provider, "HTTP request failed: {}", e);
            return Err(SearchError::NetworkError(format!("HTTP request failed: {}", e)));
        }
    };

    let status = response.status();
    record_upstream_request(provider, started.elapsed(), status.is_success());
    debug!(provider, status = status.as_u16(), "Upstream responded");

    if !status.is_success() {
        return Err(SearchError::StatusError(status.as_u16()));
    }

    Ok(response)
}

/// 发送请求并解析JSON响应体
pub async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    provider: &'static str,
) -> Result<T, SearchError> {
    let response = send(request, provider).await?;
    let body = response.bytes().await.map_err(|e| {
        SearchError::NetworkError(format!("Failed to read response body: {}", e))
    })?;

    serde_json::from_slice(&body).map_err(|e| SearchError::DecodeError(e.to_string()))
}

/// 发送请求并返回文本响应体
pub async fn get_text(request: RequestBuilder, provider: &'static str) -> Result<String, SearchError> {
    let response = send(request, provider).await?;
    response
        .text()
        .await
        .map_err(|e| SearchError::NetworkError(format!("Failed to read response body: {}", e)))
}
