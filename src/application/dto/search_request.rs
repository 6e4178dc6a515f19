// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{Article, BlogPost, Paper, Video};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// `/search` 查询参数
#[derive(Debug, Default, Deserialize, Validate)]
pub struct VideoSearchParams {
    #[validate(required, length(min = 1, message = "Query cannot be empty"))]
    pub q: Option<String>,
    #[serde(rename = "pageToken")]
    pub page_token: Option<String>,
}

/// `/articles` 查询参数
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ArticleSearchParams {
    #[validate(required, length(min = 1, message = "Query cannot be empty"))]
    pub q: Option<String>,
    pub start: Option<String>,
}

/// `/papers` 查询参数
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PaperSearchParams {
    #[validate(required, length(min = 1, message = "Query cannot be empty"))]
    pub q: Option<String>,
}

/// `/blogs` 查询参数
#[derive(Debug, Default, Deserialize, Validate)]
pub struct BlogSearchParams {
    #[validate(required, length(min = 1, message = "Query cannot be empty"))]
    pub q: Option<String>,
    pub start: Option<String>,
}

impl VideoSearchParams {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    /// 空字符串视为没有分页游标
    pub fn page_token(&self) -> Option<&str> {
        self.page_token.as_deref().filter(|t| !t.is_empty())
    }
}

impl ArticleSearchParams {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    pub fn start_index(&self) -> u32 {
        parse_start_index(self.start.as_deref())
    }
}

impl PaperSearchParams {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

impl BlogSearchParams {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    pub fn start_index(&self) -> u32 {
        parse_start_index(self.start.as_deref())
    }
}

/// 解析从 1 开始的起始位置，缺失、非数字或 0 时取 1
pub fn parse_start_index(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|start| *start > 0)
        .unwrap_or(1)
}

#[derive(Debug, Serialize)]
pub struct VideoSearchResponse {
    pub youtube: Vec<Video>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSearchResponse {
    pub articles: Vec<Article>,
    pub next_start_index: u32,
}

#[derive(Debug, Serialize)]
pub struct PaperSearchResponse {
    pub papers: Vec<Paper>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSearchResponse {
    pub blogs: Vec<BlogPost>,
    pub next_start_index: u32,
}
