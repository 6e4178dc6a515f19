// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::search_request::ArticleSearchResponse;
use crate::domain::models::Article;
use crate::domain::search::engine::{SearchError, WebSearchEngine};
use crate::domain::services::errors::ServiceError;
use crate::domain::services::relevance_scorer::RelevanceScorer;
use std::sync::Arc;
use tracing::{error, info};

/// 每页结果数，用于计算下一页起始位置
pub const PAGE_SIZE: u32 = 10;

/// 文章搜索服务
pub struct ArticleService {
    engine: Arc<dyn WebSearchEngine>,
    scorer: RelevanceScorer,
}

impl ArticleService {
    pub fn new(engine: Arc<dyn WebSearchEngine>, scorer: RelevanceScorer) -> Self {
        Self { engine, scorer }
    }

    /// 搜索并按评分排序文章
    ///
    /// # 参数
    ///
    /// * `query` - 搜索词
    /// * `start` - 从 1 开始的结果偏移
    ///
    /// # 错误
    ///
    /// 上游调用失败或没有返回任何条目时返回 `ServiceError::Upstream`
    pub async fn search(
        &self,
        query: &str,
        start: u32,
    ) -> Result<ArticleSearchResponse, ServiceError> {
        let articles = self.fetch_ranked(query, start).await.map_err(|e| {
            error!(
                engine = self.engine.name(),
                "Error fetching articles from Google Custom Search: {}", e
            );
            ServiceError::Upstream("Could not fetch articles from Google Custom Search")
        })?;

        Ok(ArticleSearchResponse {
            articles,
            next_start_index: start.saturating_add(PAGE_SIZE),
        })
    }

    async fn fetch_ranked(&self, query: &str, start: u32) -> Result<Vec<Article>, SearchError> {
        let items = self.engine.search(query, start).await?;
        if items.is_empty() {
            return Err(SearchError::NoResults("No articles found".to_string()));
        }

        let mut articles: Vec<Article> = items
            .into_iter()
            .map(|item| {
                Article::new(
                    item.title,
                    item.link,
                    item.snippet,
                    item.display_link,
                    &self.scorer,
                )
            })
            .collect();

        RelevanceScorer::rank(&mut articles);
        info!("Ranked {} articles for query '{}'", articles.len(), query);

        Ok(articles)
    }
}
