// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::search_request::VideoSearchResponse;
use crate::domain::models::Video;
use crate::domain::search::engine::{SearchError, VideoSearchEngine, VideoSearchPage};
use crate::domain::services::errors::ServiceError;
use crate::domain::services::relevance_scorer::RelevanceScorer;
use std::sync::Arc;
use tracing::{debug, error, info};

/// 视频搜索服务
///
/// 先搜索视频ID，再按ID批量获取统计数据，两次调用严格按顺序执行
pub struct VideoService {
    engine: Arc<dyn VideoSearchEngine>,
}

impl VideoService {
    pub fn new(engine: Arc<dyn VideoSearchEngine>) -> Self {
        Self { engine }
    }

    /// 搜索并按评分排序视频
    ///
    /// # 参数
    ///
    /// * `query` - 搜索词
    /// * `page_token` - 上一次搜索返回的分页游标
    ///
    /// # 错误
    ///
    /// 任一上游调用失败时返回 `ServiceError::Upstream`
    pub async fn search(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<VideoSearchResponse, ServiceError> {
        let videos = self.fetch_ranked(query, page_token).await.map_err(|e| {
            error!(engine = self.engine.name(), "Error fetching YouTube data: {}", e);
            ServiceError::Upstream("Could not fetch YouTube data")
        })?;

        Ok(VideoSearchResponse { youtube: videos })
    }

    async fn fetch_ranked(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<Vec<Video>, SearchError> {
        let VideoSearchPage {
            hits,
            next_page_token,
        } = self.engine.search_videos(query, page_token).await?;

        if hits.is_empty() {
            debug!("No video ids found for query '{}'", query);
            return Ok(Vec::new());
        }

        let ids: Vec<String> = hits.iter().map(|hit| hit.video_id.clone()).collect();
        let statistics = self.engine.fetch_statistics(&ids).await?;

        // Statistics are matched to hits by position
        let mut videos: Vec<Video> = hits
            .into_iter()
            .enumerate()
            .map(|(index, hit)| {
                let stats = statistics.get(index).copied().unwrap_or_default();
                Video::new(
                    hit.title,
                    hit.url,
                    hit.thumbnail,
                    stats.views,
                    stats.likes,
                    next_page_token.clone(),
                )
            })
            .collect();

        RelevanceScorer::rank(&mut videos);
        info!("Ranked {} videos for query '{}'", videos.len(), query);

        Ok(videos)
    }
}
