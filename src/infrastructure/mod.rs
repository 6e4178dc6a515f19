// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统交互。
///
/// 包含的子模块：
/// - 抽取（extraction）：从学术搜索结果页HTML中抽取论文字段
/// - HTTP（http）：共享的上游HTTP客户端与请求发送
/// - 指标（metrics）：Prometheus 指标记录与导出
/// - 搜索（search）：YouTube、Google Custom Search、Google Scholar 客户端
///
/// 基础设施层实现领域层定义的搜索接口，领域层不感知这些实现。
pub mod extraction;
pub mod http;
pub mod metrics;
pub mod search;
