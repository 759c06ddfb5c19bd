/// Configuration management for sales-service
///
/// Loads configuration from environment variables (and `.env`) with defaults
/// that reproduce the reference deployment on port 4010.
use dotenvy::dotenv;
use std::env;

use crate::error::AppError;

const DEFAULT_PORT: u16 = 4010;

#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppConfig,
    pub log: LogConfig,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub env: String,
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    /// `EnvFilter` directives
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("unknown LOG_FORMAT: {other}"))),
        }
    }
}

impl AppConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let host = env::var("SALES_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = match env::var("SALES_SERVICE_PORT") {
            Ok(raw) => raw.trim().parse().map_err(|e| {
                AppError::Config(format!("invalid SALES_SERVICE_PORT {raw:?}: {e}"))
            })?,
            Err(_) => DEFAULT_PORT,
        };
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = match env::var("LOG_FORMAT") {
            Ok(raw) => raw.parse()?,
            Err(_) => LogFormat::Pretty,
        };

        Ok(Config {
            app: AppConfig {
                host,
                port,
                env: app_env,
            },
            log: LogConfig { filter, format },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "SALES_SERVICE_HOST",
        "SALES_SERVICE_PORT",
        "APP_ENV",
        "RUST_LOG",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn defaults_listen_on_4010() {
        clear_env();
        let config = Config::from_env().expect("defaults load");
        assert_eq!(config.app.port, 4010);
        assert_eq!(config.app.bind_address(), "0.0.0.0:4010");
        assert_eq!(config.app.env, "development");
        assert_eq!(config.log.format, LogFormat::Pretty);
    }

    #[test]
    #[serial]
    fn reads_overrides() {
        clear_env();
        env::set_var("SALES_SERVICE_HOST", "127.0.0.1");
        env::set_var("SALES_SERVICE_PORT", "8088");
        env::set_var("LOG_FORMAT", "JSON");

        let config = Config::from_env().expect("overrides load");
        assert_eq!(config.app.bind_address(), "127.0.0.1:8088");
        assert_eq!(config.log.format, LogFormat::Json);
        clear_env();
    }

    #[test]
    #[serial]
    fn rejects_bad_port() {
        clear_env();
        env::set_var("SALES_SERVICE_PORT", "not-a-port");

        let err = Config::from_env().expect_err("bad port rejected");
        assert!(matches!(err, AppError::Config(_)));
        clear_env();
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!("text".parse::<LogFormat>().ok(), Some(LogFormat::Pretty));
    }
}
