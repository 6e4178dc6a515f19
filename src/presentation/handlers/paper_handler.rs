// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::{
    application::dto::search_request::{PaperSearchParams, PaperSearchResponse},
    domain::services::{paper_service::PaperService, ServiceError},
    presentation::{errors::AppError, extractors::ValidatedQuery},
};

/// 处理学术论文搜索请求
///
/// 没有解析到任何论文时返回 404 `{ "error": "No papers found" }`
pub async fn search_papers(
    Extension(service): Extension<Arc<PaperService>>,
    ValidatedQuery(params): ValidatedQuery<PaperSearchParams>,
) -> Result<Json<PaperSearchResponse>, AppError> {
    let response = service.search(params.query()).await?;
    if response.papers.is_empty() {
        return Err(ServiceError::NotFound("No papers found").into());
    }
    Ok(Json(response))
}
