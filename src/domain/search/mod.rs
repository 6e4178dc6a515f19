// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义上游搜索服务的接口、原始结果条目和错误类型
/// 领域服务只依赖这些接口，具体的HTTP和HTML实现位于基础设施层
pub mod engine;
