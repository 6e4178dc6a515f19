// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::ExtractedPaper;
use crate::domain::services::relevance_scorer::{RelevanceScorer, Scored};
use serde::Serialize;

/// 学术论文搜索结果
///
/// 引用数和年份均为尽力抽取的结果，评分可能为负数
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paper {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub citations: u64,
    pub year: Option<i32>,
    score: f64,
}

impl Paper {
    pub fn new(extracted: ExtractedPaper, current_year: i32) -> Self {
        let citations = extracted.citations.unwrap_or(0);
        Self {
            score: RelevanceScorer::paper_score(citations, extracted.year, current_year),
            title: extracted.title,
            url: extracted.url,
            summary: extracted.summary,
            citations,
            year: extracted.year,
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

impl Scored for Paper {
    fn score(&self) -> f64 {
        self.score
    }
}
