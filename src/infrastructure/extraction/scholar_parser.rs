// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::{ExtractedPaper, PaperExtractor, SearchError};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::num::IntErrorKind;
use tracing::{debug, info};

/// 学术搜索结果页使用的CSS选择器
#[derive(Debug, Clone)]
pub struct ScholarSelectors {
    /// 单个结果块
    pub result_block: String,
    /// 标题链接
    pub title_anchor: String,
    /// 摘要
    pub summary: String,
    /// 含引用数的操作栏
    pub citations: String,
    /// 作者、出处和年份
    pub attribution: String,
}

impl Default for ScholarSelectors {
    fn default() -> Self {
        Self {
            result_block: ".gs_ri".to_string(),
            title_anchor: ".gs_rt a".to_string(),
            summary: ".gs_rs".to_string(),
            citations: ".gs_fl".to_string(),
            attribution: ".gs_a".to_string(),
        }
    }
}

/// Google Scholar 结果页解析器
///
/// 引用数取操作栏文本中的第一个整数，年份取署名文本中的第一个四位数字，
/// 两者都是尽力而为，可能取到无关的数字
pub struct ScholarHtmlParser {
    result_block: Selector,
    title_anchor: Selector,
    summary: Selector,
    citations: Selector,
    attribution: Selector,
    integer: Regex,
    year: Regex,
}

impl ScholarHtmlParser {
    pub fn new() -> Result<Self, SearchError> {
        Self::with_selectors(&ScholarSelectors::default())
    }

    pub fn with_selectors(selectors: &ScholarSelectors) -> Result<Self, SearchError> {
        Ok(Self {
            result_block: parse_selector(&selectors.result_block)?,
            title_anchor: parse_selector(&selectors.title_anchor)?,
            summary: parse_selector(&selectors.summary)?,
            citations: parse_selector(&selectors.citations)?,
            attribution: parse_selector(&selectors.attribution)?,
            integer: parse_regex(r"\d+")?,
            year: parse_regex(r"\d{4}")?,
        })
    }

    fn parse_block(&self, block: ElementRef<'_>) -> ExtractedPaper {
        let anchor = block.select(&self.title_anchor).next();
        let title = anchor
            .map(|a| a.text().collect::<String>())
            .unwrap_or_default();
        let url = anchor
            .and_then(|a| a.value().attr("href"))
            .unwrap_or_default()
            .to_string();

        let summary = region_text(block, &self.summary);
        let citations = self
            .integer
            .find(&region_text(block, &self.citations))
            .and_then(|m| parse_saturating(m.as_str()));
        let year = self
            .year
            .find(&region_text(block, &self.attribution))
            .and_then(|m| m.as_str().parse::<i32>().ok());

        ExtractedPaper {
            title: title.trim().to_string(),
            url,
            summary: summary.trim().to_string(),
            citations,
            year,
        }
    }
}

impl PaperExtractor for ScholarHtmlParser {
    fn extract(&self, html: &str) -> Vec<ExtractedPaper> {
        let document = Html::parse_document(html);

        let papers: Vec<ExtractedPaper> = document
            .select(&self.result_block)
            .map(|block| self.parse_block(block))
            .collect();

        info!("Parsed {} result blocks", papers.len());
        for (i, paper) in papers.iter().take(3).enumerate() {
            debug!(
                "Paper {}: {} (citations={:?}, year={:?})",
                i + 1,
                paper.title.chars().take(50).collect::<String>(),
                paper.citations,
                paper.year
            );
        }

        papers
    }
}

/// Text of every matching region inside the block, concatenated
fn region_text(block: ElementRef<'_>, selector: &Selector) -> String {
    block
        .select(selector)
        .flat_map(|element| element.text())
        .collect()
}

/// Digit runs wider than `u64` saturate instead of being dropped
fn parse_saturating(digits: &str) -> Option<u64> {
    match digits.parse::<u64>() {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    }
}

fn parse_selector(css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css)
        .map_err(|e| SearchError::ConfigError(format!("Invalid selector '{}': {:?}", css, e)))
}

fn parse_regex(pattern: &str) -> Result<Regex, SearchError> {
    Regex::new(pattern)
        .map_err(|e| SearchError::ConfigError(format!("Invalid pattern '{}': {}", pattern, e)))
}
