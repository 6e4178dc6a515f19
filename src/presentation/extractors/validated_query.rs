// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::presentation::errors::missing_query_response;

/// 经过校验的查询字符串参数
///
/// 校验失败（缺少或为空的搜索词）时直接返回 400 纯文本响应
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if let Err(e) = params.validate() {
            debug!("Rejected query parameters: {}", e);
            return Err(missing_query_response());
        }

        Ok(ValidatedQuery(params))
    }
}
