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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 默认的上游请求 User-Agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; siftrs/0.1; +https://github.com/Kirky-X/siftrs)";

/// 应用程序配置设置
///
/// 包含服务器监听、三个上游服务的凭据与地址、HTTP客户端和排序参数
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// YouTube Data API 配置
    pub youtube: YouTubeSettings,
    /// Google Custom Search 配置
    pub custom_search: CustomSearchSettings,
    /// Google Scholar 配置
    pub scholar: ScholarSettings,
    /// 上游HTTP客户端配置
    pub http: HttpSettings,
    /// 排序配置
    pub ranking: RankingSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// YouTube Data API 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeSettings {
    /// API 密钥
    pub api_key: Option<String>,
    /// API 根地址（测试时可指向本地模拟服务）
    pub base_url: String,
}

/// Google Custom Search 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CustomSearchSettings {
    /// API 密钥
    pub api_key: Option<String>,
    /// 搜索引擎ID
    pub cx: Option<String>,
    /// API 根地址
    pub base_url: String,
}

/// Google Scholar 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScholarSettings {
    /// 站点根地址
    pub base_url: String,
}

/// 上游HTTP客户端配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

/// 排序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    /// 文章来源命中该子串时获得加分
    pub trusted_domain: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/` 目录下的配置文件、`SIFTRS__` 前缀的环境变量，
    /// 最后由 `YOUTUBE_API_KEY`、`GOOGLE_CUSTOM_SEARCH_API_KEY`、
    /// `GOOGLE_CUSTOM_SEARCH_CX` 和 `PORT` 覆盖对应字段
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(|key| std::env::var(key).ok())
    }

    /// 使用给定的变量查找函数加载配置
    ///
    /// `APP_ENVIRONMENT` 和旧式变量名都通过 `lookup` 读取，`SIFTRS__` 前缀变量仍来自进程环境
    pub fn load<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let env = non_empty("APP_ENVIRONMENT").unwrap_or_else(|| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Upstream endpoints
            .set_default("youtube.base_url", "https://www.googleapis.com")?
            .set_default("custom_search.base_url", "https://www.googleapis.com")?
            .set_default("scholar.base_url", "https://scholar.google.com")?
            .set_default("http.user_agent", DEFAULT_USER_AGENT)?
            .set_default("ranking.trusted_domain", "reputable-site.com")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SIFTRS").separator("__"))
            // Plain variable names used by existing deployments
            .set_override_option("youtube.api_key", non_empty("YOUTUBE_API_KEY"))?
            .set_override_option(
                "custom_search.api_key",
                non_empty("GOOGLE_CUSTOM_SEARCH_API_KEY"),
            )?
            .set_override_option("custom_search.cx", non_empty("GOOGLE_CUSTOM_SEARCH_CX"))?
            .set_override_option("server.port", non_empty("PORT"))?;

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
