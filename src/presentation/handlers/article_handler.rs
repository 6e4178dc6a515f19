// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::{
    application::dto::search_request::{ArticleSearchParams, ArticleSearchResponse},
    domain::services::article_service::ArticleService,
    presentation::{errors::AppError, extractors::ValidatedQuery},
};

/// 处理文章搜索请求
///
/// 返回按评分降序排列的文章和下一页的起始位置
pub async fn search_articles(
    Extension(service): Extension<Arc<ArticleService>>,
    ValidatedQuery(params): ValidatedQuery<ArticleSearchParams>,
) -> Result<Json<ArticleSearchResponse>, AppError> {
    let response = service
        .search(params.query(), params.start_index())
        .await?;
    Ok(Json(response))
}
