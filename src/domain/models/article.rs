// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::relevance_scorer::{RelevanceScorer, Scored};
use serde::Serialize;

/// 网页文章搜索结果
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub snippet: String,
    /// 来源域名，例如 `www.example.com`
    pub source: String,
    score: f64,
}

impl Article {
    pub fn new(
        title: String,
        url: String,
        snippet: String,
        source: String,
        scorer: &RelevanceScorer,
    ) -> Self {
        let score = scorer.article_score(&snippet, &source);
        Self {
            title,
            url,
            snippet,
            source,
            score,
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

impl Scored for Article {
    fn score(&self) -> f64 {
        self.score
    }
}
