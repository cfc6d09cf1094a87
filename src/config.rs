use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 同时处理的最大请求数
    pub max_concurrent_requests: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// OCR 后端根地址, 例如 http://127.0.0.1:5000
    pub backend_url: String,
    /// 单次后端调用超时 (秒)
    pub request_timeout_secs: u64,
}

impl OcrConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                max_concurrent_requests: 64,
            },
            ocr: OcrConfig {
                backend_url: "http://127.0.0.1:5000".to_string(),
                request_timeout_secs: 120,
            },
        }
    }
}

impl AppConfig {
    /// 默认值 < config/gateway.{toml,json,...} < 环境变量 (OCR_GATEWAY__OCR__BACKEND_URL 等)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name("config/gateway").required(false))
            .add_source(Environment::with_prefix("OCR_GATEWAY").separator("__"))
            .build()?
            .try_deserialize()
    }
}
