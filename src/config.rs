//! 配置系统
//! 默认值 + 环境变量（前缀 LOGIN_）

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址，例如 "0.0.0.0:3000"
    pub addr: String,
    /// 优雅关闭超时时间（秒）
    pub graceful_shutdown_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别: trace, debug, info, warn, error
    pub level: String,
    /// 日志格式: json, pretty
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// 模拟网络延迟（毫秒），成功与失败都会等待
    pub latency_ms: u64,
    /// 用户种子文件（JSON 数组），为空时使用内置账户
    pub seed_file: Option<String>,
}

impl AuthConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
}

/// 延迟上限，避免误配置导致请求长时间挂起
const MAX_LATENCY_MS: u64 = 10_000;

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.addr", "0.0.0.0:3000")?
            .set_default("server.graceful_shutdown_timeout_secs", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            .set_default("auth.latency_ms", 500)?
            // 环境变量示例: LOGIN_AUTH__LATENCY_MS=0
            .add_source(
                Environment::with_prefix("LOGIN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: AppConfig = settings.build()?.try_deserialize()?;

        config.validate()?;

        Ok(config)
    }

    /// 验证配置合法性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(port_str) = self.server.addr.split(':').next_back() {
            if let Ok(port) = port_str.parse::<u16>() {
                // 0 表示随机端口
                if port != 0 && port < 1024 {
                    return Err(ConfigError::Message(
                        "Server port should be >= 1024".to_string(),
                    ));
                }
            }
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::Message(format!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                )))
            }
        }

        match self.logging.format.to_lowercase().as_str() {
            "json" | "pretty" => {}
            _ => {
                return Err(ConfigError::Message(format!(
                    "Invalid log format: {}. Must be one of: json, pretty",
                    self.logging.format
                )))
            }
        }

        if self.auth.latency_ms > MAX_LATENCY_MS {
            return Err(ConfigError::Message(format!(
                "auth.latency_ms must be <= {}",
                MAX_LATENCY_MS
            )));
        }

        if let Some(path) = &self.auth.seed_file {
            if path.trim().is_empty() {
                return Err(ConfigError::Message(
                    "auth.seed_file must not be blank".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("LOGIN_SERVER__ADDR");
        std::env::remove_var("LOGIN_LOGGING__LEVEL");
        std::env::remove_var("LOGIN_LOGGING__FORMAT");
        std::env::remove_var("LOGIN_AUTH__LATENCY_MS");
        std::env::remove_var("LOGIN_AUTH__SEED_FILE");
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear_env();

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.server.addr, "0.0.0.0:3000");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.auth.latency(), Duration::from_millis(500));
        assert!(config.auth.seed_file.is_none());
    }

    #[test]
    #[serial]
    fn test_config_env_override() {
        clear_env();
        std::env::set_var("LOGIN_AUTH__LATENCY_MS", "0");
        std::env::set_var("LOGIN_AUTH__SEED_FILE", "users.json");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.auth.latency_ms, 0);
        assert_eq!(config.auth.seed_file.as_deref(), Some("users.json"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_validation_invalid_port() {
        clear_env();
        std::env::set_var("LOGIN_SERVER__ADDR", "0.0.0.0:80");

        let result = AppConfig::from_env();
        assert!(result.is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_validation_invalid_log_level() {
        clear_env();
        std::env::set_var("LOGIN_LOGGING__LEVEL", "invalid");

        let result = AppConfig::from_env();
        assert!(result.is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_validation_latency_too_large() {
        clear_env();
        std::env::set_var("LOGIN_AUTH__LATENCY_MS", "60000");

        let result = AppConfig::from_env();
        assert!(result.is_err());

        clear_env();
    }
}
