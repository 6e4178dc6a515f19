// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::{
    application::dto::search_request::{BlogSearchParams, BlogSearchResponse},
    domain::services::blog_service::BlogService,
    presentation::{errors::AppError, extractors::ValidatedQuery},
};

pub async fn search_blogs(
    Extension(service): Extension<Arc<BlogService>>,
    ValidatedQuery(params): ValidatedQuery<BlogSearchParams>,
) -> Result<Json<BlogSearchResponse>, AppError> {
    let response = service
        .search(params.query(), params.start_index())
        .await?;
    Ok(Json(response))
}
