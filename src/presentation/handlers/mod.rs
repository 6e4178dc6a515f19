// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 包含各个API端点的具体处理逻辑
/// 每个处理器负责校验查询参数、调用对应的领域服务并返回JSON响应
pub mod article_handler;
pub mod blog_handler;
pub mod metrics_handler;
pub mod paper_handler;
pub mod search_handler;
