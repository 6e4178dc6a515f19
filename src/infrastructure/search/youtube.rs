// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::YouTubeSettings;
use crate::domain::search::engine::{
    SearchError, VideoHit, VideoSearchEngine, VideoSearchPage, VideoStatistics,
};
use crate::infrastructure::http::get_json;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

/// 单次搜索返回的最大视频数
const MAX_RESULTS: &str = "50";

/// YouTube Data API v3 客户端
pub struct YouTubeSearchEngine {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl YouTubeSearchEngine {
    pub fn new(client: Client, settings: &YouTubeSettings) -> Self {
        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        }
    }

    fn api_key(&self) -> Result<&str, SearchError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| SearchError::ConfigError("YOUTUBE_API_KEY is not set".to_string()))
    }

    pub fn watch_url(video_id: &str) -> String {
        format!("https://www.youtube.com/watch?v={}", video_id)
    }
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: SearchItemId,
    #[serde(default)]
    snippet: SearchSnippet,
}

#[derive(Debug, Default, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchSnippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Default, Deserialize)]
struct Statistics {
    #[serde(rename = "viewCount")]
    view_count: Option<Value>,
    #[serde(rename = "likeCount")]
    like_count: Option<Value>,
}

/// Counts arrive as decimal strings; anything unparseable is 0
fn parse_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

impl Thumbnails {
    fn best_url(self) -> String {
        self.medium
            .or(self.default)
            .map(|t| t.url)
            .unwrap_or_default()
    }
}

#[async_trait]
impl VideoSearchEngine for YouTubeSearchEngine {
    async fn search_videos(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<VideoSearchPage, SearchError> {
        let key = self.api_key()?;
        let url = format!("{}/youtube/v3/search", self.base_url);
        info!("YouTube search request: query={}, page_token={:?}", query, page_token);

        let request = self.client.get(&url).query(&[
            ("part", "snippet"),
            ("maxResults", MAX_RESULTS),
            ("q", query),
            ("key", key),
            ("pageToken", page_token.unwrap_or("")),
        ]);
        let response: SearchListResponse = get_json(request, self.name()).await?;

        // Channels and playlists carry no videoId and are skipped
        let hits = response
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id.filter(|id| !id.is_empty())?;
                Some(VideoHit {
                    url: Self::watch_url(&video_id),
                    video_id,
                    title: item.snippet.title,
                    thumbnail: item.snippet.thumbnails.best_url(),
                })
            })
            .collect();

        Ok(VideoSearchPage {
            hits,
            next_page_token: response.next_page_token,
        })
    }

    async fn fetch_statistics(
        &self,
        video_ids: &[String],
    ) -> Result<Vec<VideoStatistics>, SearchError> {
        let key = self.api_key()?;
        let url = format!("{}/youtube/v3/videos", self.base_url);
        let ids = video_ids.join(",");

        let request = self.client.get(&url).query(&[
            ("part", "statistics"),
            ("id", ids.as_str()),
            ("key", key),
        ]);
        let response: VideoListResponse = get_json(request, self.name()).await?;

        Ok(response
            .items
            .into_iter()
            .map(|item| VideoStatistics {
                views: parse_count(item.statistics.view_count.as_ref()),
                likes: parse_count(item.statistics.like_count.as_ref()),
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}
