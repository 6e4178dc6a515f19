// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTML字段抽取模块
///
/// 将搜索结果页HTML转换为结构化的可选字段
pub mod scholar_parser;

pub use scholar_parser::{ScholarHtmlParser, ScholarSelectors};
