// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 定义HTTP层与领域服务之间传递的数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含结果记录、评分规则和上游搜索接口
pub mod domain;

/// 基础设施模块
///
/// 提供上游搜索服务的HTTP客户端、HTML解析和指标收集
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和错误映射
pub mod presentation;

/// 工具模块
///
/// 提供日志初始化等通用功能
pub mod utils;
