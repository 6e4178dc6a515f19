// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义查询字符串参数和JSON响应体
/// 用于在HTTP层和领域服务之间传输数据
pub mod search_request;
