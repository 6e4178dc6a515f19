// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：视频、文章、论文、博客等结果记录
/// - 搜索接口（search）：上游搜索服务的抽象接口和错误类型
/// - 服务（services）：获取、评分、排序的业务流程
///
/// 领域层不依赖任何具体的HTTP客户端或HTML解析实现。
pub mod models;
pub mod search;
pub mod services;
