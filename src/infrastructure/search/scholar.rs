// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ScholarSettings;
use crate::domain::search::engine::{ScholarSearchEngine, SearchError};
use crate::infrastructure::http::get_text;
use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

/// Google Scholar 结果页抓取
///
/// 不需要认证，只负责取回HTML，字段抽取由 `ScholarHtmlParser` 完成
pub struct GoogleScholarEngine {
    client: Client,
    base_url: String,
}

impl GoogleScholarEngine {
    pub fn new(client: Client, settings: &ScholarSettings) -> Self {
        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ScholarSearchEngine for GoogleScholarEngine {
    async fn fetch_results_page(&self, query: &str) -> Result<String, SearchError> {
        let url = format!("{}/scholar", self.base_url);
        info!("Google Scholar request: query={}", query);

        let request = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header("Accept-Language", "en-US,en;q=0.9");
        let html = get_text(request, self.name()).await?;

        info!("Google Scholar returned HTML length: {} bytes", html.len());
        Ok(html)
    }

    fn name(&self) -> &'static str {
        "google_scholar"
    }
}
