// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::search_request::BlogSearchResponse;
use crate::domain::models::BlogPost;
use crate::domain::search::engine::{WebSearchEngine, WebSearchItem};
use crate::domain::services::article_service::PAGE_SIZE;
use crate::domain::services::errors::ServiceError;
use std::sync::Arc;
use tracing::{debug, error};

/// 判定为博客的链接或摘要特征
const BLOG_MARKERS: [&str; 3] = ["blog", ".blog.", "post"];

/// 博客搜索服务
///
/// 在搜索词后追加 "blog" 调用网页搜索，只保留看起来像博客的条目，
/// 不评分也不排序，保持上游顺序
pub struct BlogService {
    engine: Arc<dyn WebSearchEngine>,
}

impl BlogService {
    pub fn new(engine: Arc<dyn WebSearchEngine>) -> Self {
        Self { engine }
    }

    pub async fn search(&self, query: &str, start: u32) -> Result<BlogSearchResponse, ServiceError> {
        let augmented = format!("{} blog", query);
        let items = self.engine.search(&augmented, start).await.map_err(|e| {
            error!(engine = self.engine.name(), "Error fetching blog posts: {}", e);
            ServiceError::Upstream("Could not fetch blog posts")
        })?;

        let total = items.len();
        let blogs: Vec<BlogPost> = items
            .into_iter()
            .filter(is_likely_blog)
            .map(|item| BlogPost {
                title: item.title,
                url: item.link,
                snippet: item.snippet,
                image_url: item.image_url,
            })
            .collect();
        debug!("Kept {} of {} items as blog posts", blogs.len(), total);

        Ok(BlogSearchResponse {
            blogs,
            next_start_index: start.saturating_add(PAGE_SIZE),
        })
    }
}

/// 链接或摘要中包含任一博客特征时保留
pub fn is_likely_blog(item: &WebSearchItem) -> bool {
    BLOG_MARKERS
        .iter()
        .any(|marker| item.link.contains(marker) || item.snippet.contains(marker))
}
