// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了每次请求中产生的结果记录：
/// - 视频（video）：带观看量、点赞数和评分的视频
/// - 文章（article）：带摘要和来源域名的网页文章
/// - 论文（paper）：从学术搜索页面中抽取的论文
/// - 博客（blog_post）：经过过滤的博客文章
///
/// 所有记录只在单个请求内存在，评分在构造时计算一次，之后不再修改。
pub mod article;
pub mod blog_post;
pub mod paper;
pub mod video;

pub use article::Article;
pub use blog_post::BlogPost;
pub use paper::Paper;
pub use video::Video;
