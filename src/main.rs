// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use siftrs::config::settings::Settings;
use siftrs::infrastructure::metrics;
use siftrs::infrastructure::search::SearchEngineFactory;
use siftrs::presentation::routes;
use siftrs::utils::telemetry;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责加载配置、装配搜索服务并启动HTTP服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env before anything reads the environment
    dotenv::dotenv().ok();

    // 2. Initialize logging
    telemetry::init_telemetry();
    info!("Starting siftrs...");

    // 3. Initialize Prometheus Metrics
    let metrics_handle = metrics::init_metrics()?;

    // 4. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 5. Build upstream engines and services
    let services = SearchEngineFactory::create_services(&settings)?;
    info!("Search services initialized");

    // 6. Start HTTP server
    let app = routes::app(services, metrics_handle);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
