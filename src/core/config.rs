//! 服务配置
//!
//! 加载顺序：默认值 → TOML 配置文件 → 环境变量覆盖。

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 未指定 `CATALOG_CONFIG` 时尝试读取的配置文件
pub const DEFAULT_CONFIG_PATH: &str = "config/catalog.toml";

/// 服务配置结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
    /// CORS 允许的来源
    pub allowed_origins: Vec<String>,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            timeout_seconds: 30,
            allowed_origins: vec![
                "http://localhost:3001".to_string(),
                "http://localhost:3002".to_string(),
            ],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误 {path}: {message}")]
    FileRead { path: PathBuf, message: String },
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("环境变量 {key} 的值无效: {value}")]
    InvalidEnvOverride { key: String, value: String },
    #[error("配置验证错误: {0}")]
    Validation(String),
}

impl AppConfig {
    /// 从配置文件加载配置，文件中缺省的字段使用默认值
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 按进程环境加载完整配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match read_env("CATALOG_CONFIG") {
            Some(path) => Self::load_from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(read_env)?;
        config.validate()?;
        Ok(config)
    }

    /// 用环境变量覆盖配置；`lookup` 便于测试时替换进程环境
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("PORT") {
            self.http.port = parse_number("PORT", &value)?;
        }
        if let Some(value) = lookup("CATALOG_BIND_ADDRESS") {
            self.http.bind_address = value;
        }
        if let Some(value) = lookup("CATALOG_TIMEOUT_SECONDS") {
            self.http.timeout_seconds = parse_number("CATALOG_TIMEOUT_SECONDS", &value)?;
        }
        if let Some(value) = lookup("CATALOG_ALLOWED_ORIGINS") {
            self.http.allowed_origins = value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(value) = lookup("CATALOG_LOG_LEVEL") {
            self.logging.level = value;
        }
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }

    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.http.bind_address, self.http.port)
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvOverride {
            key: key.to_string(),
            value: value.to_string(),
        })
}
