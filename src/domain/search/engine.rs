// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Upstream returned status {0}")]
    StatusError(u16),
    #[error("Failed to decode upstream response: {0}")]
    DecodeError(String),
    #[error("{0}")]
    NoResults(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// A video returned by the search phase, before statistics are known.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoHit {
    pub video_id: String,
    pub title: String,
    pub url: String,
    pub thumbnail: String,
}

/// One page of video search results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoSearchPage {
    pub hits: Vec<VideoHit>,
    pub next_page_token: Option<String>,
}

/// View and like counts for a single video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoStatistics {
    pub views: u64,
    pub likes: u64,
}

/// A raw item from the general web search API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebSearchItem {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub display_link: String,
    pub image_url: Option<String>,
}

/// Fields recovered from one academic search result block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedPaper {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub citations: Option<u64>,
    pub year: Option<i32>,
}

#[async_trait]
pub trait VideoSearchEngine: Send + Sync {
    /// Search phase: matching videos plus the next-page cursor
    async fn search_videos(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<VideoSearchPage, SearchError>;

    /// Statistics phase: counts in the same order the provider returns them
    async fn fetch_statistics(
        &self,
        video_ids: &[String],
    ) -> Result<Vec<VideoStatistics>, SearchError>;

    /// Get the name of the search engine
    fn name(&self) -> &'static str;
}

#[async_trait]
pub trait WebSearchEngine: Send + Sync {
    /// Search starting at the 1-based `start` offset. A response without
    /// items yields an empty vector.
    async fn search(&self, query: &str, start: u32) -> Result<Vec<WebSearchItem>, SearchError>;

    fn name(&self) -> &'static str;
}

#[async_trait]
pub trait ScholarSearchEngine: Send + Sync {
    /// Fetch the raw HTML results page for a query
    async fn fetch_results_page(&self, query: &str) -> Result<String, SearchError>;

    fn name(&self) -> &'static str;
}

/// Raw HTML in, structured optional fields out.
pub trait PaperExtractor: Send + Sync {
    fn extract(&self, html: &str) -> Vec<ExtractedPaper>;
}
