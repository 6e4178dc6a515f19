// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索服务模块
///
/// 提供上游搜索服务的客户端实现
/// 包括 YouTube Data API、Google Custom Search 和 Google Scholar，
/// 以及组装领域服务的工厂
pub mod custom_search;
pub mod factory;
pub mod scholar;
pub mod youtube;

pub use factory::{SearchEngineFactory, SearchServices};
