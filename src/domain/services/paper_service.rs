// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::search_request::PaperSearchResponse;
use crate::domain::models::Paper;
use crate::domain::search::engine::{PaperExtractor, ScholarSearchEngine, SearchError};
use crate::domain::services::errors::ServiceError;
use crate::domain::services::relevance_scorer::RelevanceScorer;
use chrono::{Datelike, Utc};
use std::sync::Arc;
use tracing::{error, info};

/// 学术论文搜索服务
///
/// 抓取结果页HTML，交给 `PaperExtractor` 抽取字段，再计算评分排序。
/// 抽取规则可以替换而不影响评分逻辑。
pub struct PaperService {
    engine: Arc<dyn ScholarSearchEngine>,
    extractor: Arc<dyn PaperExtractor>,
    current_year: Option<i32>,
}

impl PaperService {
    pub fn new(engine: Arc<dyn ScholarSearchEngine>, extractor: Arc<dyn PaperExtractor>) -> Self {
        Self {
            engine,
            extractor,
            current_year: None,
        }
    }

    /// 固定评分使用的当前年份
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    /// 搜索并按评分排序论文，没有匹配的结果块时返回空列表
    pub async fn search(&self, query: &str) -> Result<PaperSearchResponse, ServiceError> {
        let papers = self.fetch_ranked(query).await.map_err(|e| {
            error!(
                engine = self.engine.name(),
                "Error fetching academic papers from Google Scholar: {}", e
            );
            ServiceError::Upstream("Could not fetch academic papers")
        })?;

        Ok(PaperSearchResponse { papers })
    }

    async fn fetch_ranked(&self, query: &str) -> Result<Vec<Paper>, SearchError> {
        let html = self.engine.fetch_results_page(query).await?;
        let current_year = self.current_year.unwrap_or_else(|| Utc::now().year());

        let mut papers: Vec<Paper> = self
            .extractor
            .extract(&html)
            .into_iter()
            .map(|extracted| Paper::new(extracted, current_year))
            .collect();

        RelevanceScorer::rank(&mut papers);
        info!("Extracted {} papers for query '{}'", papers.len(), query);

        Ok(papers)
    }
}
