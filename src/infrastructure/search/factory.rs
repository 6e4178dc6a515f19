// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::search::engine::SearchError;
use crate::domain::services::article_service::ArticleService;
use crate::domain::services::blog_service::BlogService;
use crate::domain::services::paper_service::PaperService;
use crate::domain::services::relevance_scorer::RelevanceScorer;
use crate::domain::services::video_service::VideoService;
use crate::infrastructure::extraction::ScholarHtmlParser;
use crate::infrastructure::http::build_client;
use crate::infrastructure::search::custom_search::CustomSearchEngine;
use crate::infrastructure::search::scholar::GoogleScholarEngine;
use crate::infrastructure::search::youtube::YouTubeSearchEngine;
use std::sync::Arc;
use tracing::{info, warn};

/// 四个搜索端点使用的服务集合
#[derive(Clone)]
pub struct SearchServices {
    pub videos: Arc<VideoService>,
    pub articles: Arc<ArticleService>,
    pub papers: Arc<PaperService>,
    pub blogs: Arc<BlogService>,
}

/// 搜索引擎工厂
///
/// 根据配置创建上游客户端并组装领域服务，所有客户端共享同一个连接池
pub struct SearchEngineFactory;

impl SearchEngineFactory {
    pub fn create_services(settings: &Settings) -> Result<SearchServices, SearchError> {
        let client = build_client(&settings.http)?;

        if settings.youtube.api_key.is_none() {
            warn!("YouTube API key is not configured; /search requests will fail");
        }
        if settings.custom_search.api_key.is_none() || settings.custom_search.cx.is_none() {
            warn!("Custom search credentials are not configured; /articles and /blogs requests will fail");
        }

        let youtube = Arc::new(YouTubeSearchEngine::new(client.clone(), &settings.youtube));
        let custom_search = Arc::new(CustomSearchEngine::new(
            client.clone(),
            &settings.custom_search,
        ));
        let scholar = Arc::new(GoogleScholarEngine::new(client, &settings.scholar));
        let parser = Arc::new(ScholarHtmlParser::new()?);

        let scorer = RelevanceScorer::new(settings.ranking.trusted_domain.clone());

        info!("Search services created");
        Ok(SearchServices {
            videos: Arc::new(VideoService::new(youtube)),
            articles: Arc::new(ArticleService::new(custom_search.clone(), scorer)),
            papers: Arc::new(PaperService::new(scholar, parser)),
            blogs: Arc::new(BlogService::new(custom_search)),
        })
    }
}
