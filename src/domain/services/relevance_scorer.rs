// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::cmp::Ordering;

const VIEWS_WEIGHT: f64 = 0.5;
const LIKES_WEIGHT: f64 = 0.3;
const ENGAGEMENT_WEIGHT: f64 = 0.2;
const TRUSTED_DOMAIN_BONUS: f64 = 10.0;

/// 带评分的结果记录
pub trait Scored {
    fn score(&self) -> f64;
}

/// 结果评分器
///
/// 视频和论文的评分只依赖记录自身字段，文章评分还依赖配置的可信域名
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    trusted_domain: String,
}

impl RelevanceScorer {
    pub fn new(trusted_domain: impl Into<String>) -> Self {
        Self {
            trusted_domain: trusted_domain.into(),
        }
    }

    /// 互动率：点赞数 / 观看量，观看量为 0 时为 0
    pub fn engagement_rate(views: u64, likes: u64) -> f64 {
        if views == 0 {
            return 0.0;
        }
        likes as f64 / views as f64
    }

    /// 视频评分
    ///
    /// `views*0.5 + likes*0.3 + engagementRate*100*0.2`
    pub fn video_score(views: u64, likes: u64) -> f64 {
        views as f64 * VIEWS_WEIGHT
            + likes as f64 * LIKES_WEIGHT
            + Self::engagement_rate(views, likes) * 100.0 * ENGAGEMENT_WEIGHT
    }

    /// 文章评分
    ///
    /// 摘要字符数，来源包含可信域名时额外加 10 分
    pub fn article_score(&self, snippet: &str, source: &str) -> f64 {
        let relevance = snippet.chars().count() as f64;
        let trusted = !self.trusted_domain.is_empty() && source.contains(&self.trusted_domain);
        if trusted {
            relevance + TRUSTED_DOMAIN_BONUS
        } else {
            relevance
        }
    }

    /// 论文评分
    ///
    /// 引用数减去发表至今的年数，年份未知时不扣分
    pub fn paper_score(citations: u64, year: Option<i32>, current_year: i32) -> f64 {
        let years_since = year.map_or(0, |y| current_year - y);
        citations as f64 - f64::from(years_since)
    }

    /// 按评分降序排序（稳定排序，同分保持原顺序）
    pub fn rank<T: Scored>(items: &mut [T]) {
        items.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
    }
}
