//! HTTP設定とAPIエンドポイント

use crate::env::EnvVar;
use reqwest::Client;
use std::time::Duration;

/// Postman API のデフォルトベースURL
pub const DEFAULT_API_BASE: &str = "https://api.getpostman.com";

/// ベースURLを上書きする環境変数
pub const API_BASE_ENV: &str = "AFM_POSTMAN_API_URL";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: format!("afm-tools/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// Postman API のベースURLを取得
///
/// 優先順位: 環境変数 `AFM_POSTMAN_API_URL` > デフォルト
pub fn api_base_url() -> String {
    EnvVar::get(API_BASE_ENV)
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
