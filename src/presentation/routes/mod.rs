// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::search::SearchServices;
use crate::presentation::handlers::{
    article_handler, blog_handler, metrics_handler, paper_handler, search_handler,
};
use axum::{routing::get, Extension, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 返回值
///
/// 返回未注入服务的路由，调用方需要通过 `Extension` 提供依赖
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/metrics", get(metrics_handler::metrics));

    let search_routes = Router::new()
        .route("/search", get(search_handler::search_videos))
        .route("/articles", get(article_handler::search_articles))
        .route("/papers", get(paper_handler::search_papers))
        .route("/blogs", get(blog_handler::search_blogs));

    Router::new().merge(public_routes).merge(search_routes)
}

/// 创建完整的应用
///
/// 注入搜索服务和指标句柄，并添加请求追踪与跨域层
pub fn app(services: SearchServices, metrics: PrometheusHandle) -> Router {
    routes()
        .layer(Extension(services.videos))
        .layer(Extension(services.articles))
        .layer(Extension(services.papers))
        .layer(Extension(services.blogs))
        .layer(Extension(metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
