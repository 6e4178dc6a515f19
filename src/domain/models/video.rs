// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::relevance_scorer::{RelevanceScorer, Scored};
use serde::Serialize;

/// 视频搜索结果
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub title: String,
    pub url: String,
    pub thumbnail: String,
    pub views: u64,
    pub likes: u64,
    /// 下一页游标，同一次搜索返回的所有视频共享该值
    pub next_page_token: Option<String>,
    score: f64,
}

impl Video {
    pub fn new(
        title: String,
        url: String,
        thumbnail: String,
        views: u64,
        likes: u64,
        next_page_token: Option<String>,
    ) -> Self {
        Self {
            title,
            url,
            thumbnail,
            views,
            likes,
            next_page_token,
            score: RelevanceScorer::video_score(views, likes),
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

impl Scored for Video {
    fn score(&self) -> f64 {
        self.score
    }
}
