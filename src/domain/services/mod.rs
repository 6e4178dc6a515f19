// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 每个服务对应一个搜索端点，流程都是：构造上游请求、获取结果、
/// 映射为领域记录、评分、排序。
///
/// 包含的服务：
/// - 视频服务（video_service）：两阶段获取视频和统计数据
/// - 文章服务（article_service）：网页文章搜索与评分
/// - 论文服务（paper_service）：学术搜索页面抓取与评分
/// - 博客服务（blog_service）：博客文章搜索与过滤
/// - 评分器（relevance_scorer）：所有评分公式和排序规则
pub mod article_service;
pub mod blog_service;
pub mod errors;
pub mod paper_service;
pub mod relevance_scorer;
pub mod video_service;

pub use errors::ServiceError;
