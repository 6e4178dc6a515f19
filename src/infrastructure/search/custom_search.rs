// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::CustomSearchSettings;
use crate::domain::search::engine::{SearchError, WebSearchEngine, WebSearchItem};
use crate::infrastructure::http::get_json;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

/// Google Custom Search JSON API 客户端
///
/// 文章和博客搜索共用该客户端
pub struct CustomSearchEngine {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    cx: Option<String>,
}

impl CustomSearchEngine {
    pub fn new(client: Client, settings: &CustomSearchSettings) -> Self {
        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            cx: settings.cx.clone(),
        }
    }

    fn credentials(&self) -> Result<(&str, &str), SearchError> {
        match (self.api_key.as_deref(), self.cx.as_deref()) {
            (Some(key), Some(cx)) => Ok((key, cx)),
            _ => Err(SearchError::ConfigError(
                "GOOGLE_CUSTOM_SEARCH_API_KEY and GOOGLE_CUSTOM_SEARCH_CX must be set".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CustomSearchResponse {
    items: Option<Vec<CustomSearchItem>>,
}

#[derive(Debug, Deserialize)]
struct CustomSearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
    #[serde(rename = "displayLink", default)]
    display_link: String,
    pagemap: Option<PageMap>,
}

#[derive(Debug, Deserialize)]
struct PageMap {
    #[serde(default)]
    cse_image: Vec<CseImage>,
}

#[derive(Debug, Deserialize)]
struct CseImage {
    src: Option<String>,
}

impl From<CustomSearchItem> for WebSearchItem {
    fn from(item: CustomSearchItem) -> Self {
        let image_url = item
            .pagemap
            .and_then(|p| p.cse_image.into_iter().next())
            .and_then(|image| image.src);

        Self {
            title: item.title,
            link: item.link,
            snippet: item.snippet,
            display_link: item.display_link,
            image_url,
        }
    }
}

#[async_trait]
impl WebSearchEngine for CustomSearchEngine {
    async fn search(&self, query: &str, start: u32) -> Result<Vec<WebSearchItem>, SearchError> {
        let (key, cx) = self.credentials()?;
        let url = format!("{}/customsearch/v1", self.base_url);
        let start = start.to_string();
        info!("Custom search request: query={}, start={}", query, start);

        let request = self.client.get(&url).query(&[
            ("q", query),
            ("key", key),
            ("cx", cx),
            ("start", start.as_str()),
        ]);
        let response: CustomSearchResponse = get_json(request, self.name()).await?;

        Ok(response
            .items
            .unwrap_or_default()
            .into_iter()
            .map(WebSearchItem::from)
            .collect())
    }

    fn name(&self) -> &'static str {
        "google_custom_search"
    }
}
