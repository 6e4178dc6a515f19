// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::{
    application::dto::search_request::{VideoSearchParams, VideoSearchResponse},
    domain::services::video_service::VideoService,
    presentation::{errors::AppError, extractors::ValidatedQuery},
};

/// 处理视频搜索请求
///
/// # 参数
///
/// * `service` - 视频搜索服务
/// * `params` - 查询参数，`q` 为搜索词，`pageToken` 为分页游标
///
/// # 返回值
///
/// 返回 `{ "youtube": [...] }`，视频按评分降序排列
///
/// # 错误
///
/// - 缺少搜索词时返回 400 纯文本
/// - 上游调用失败时返回 500
pub async fn search_videos(
    Extension(service): Extension<Arc<VideoService>>,
    ValidatedQuery(params): ValidatedQuery<VideoSearchParams>,
) -> Result<Json<VideoSearchResponse>, AppError> {
    let response = service
        .search(params.query(), params.page_token())
        .await?;
    Ok(Json(response))
}
