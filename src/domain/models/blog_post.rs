// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 博客文章搜索结果，不参与评分
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub image_url: Option<String>,
}
