//! Configuration module for the portfolio API.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Output format of the console log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Upper bound on pooled database connections
    pub db_max_connections: u32,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    /// Replace portfolio/timeline/projects/blog with demo content on startup
    pub seed_on_start: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("PORTFOLIO_DB_PATH")
            .unwrap_or_else(|_| "./data/portfolio.sqlite".to_string())
            .into();

        let db_max_connections = env::var("PORTFOLIO_DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let bind_addr = env::var("PORTFOLIO_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8001".to_string())
            .parse()
            .expect("Invalid PORTFOLIO_BIND_ADDR format");

        let log_level = env::var("PORTFOLIO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = env::var("PORTFOLIO_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or(LogFormat::Pretty);

        let seed_on_start = env::var("PORTFOLIO_SEED")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            db_path,
            db_max_connections,
            bind_addr,
            log_level,
            log_format,
            seed_on_start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("PORTFOLIO_DB_PATH");
        env::remove_var("PORTFOLIO_DB_MAX_CONNECTIONS");
        env::remove_var("PORTFOLIO_BIND_ADDR");
        env::remove_var("PORTFOLIO_LOG_LEVEL");
        env::remove_var("PORTFOLIO_LOG_FORMAT");
        env::remove_var("PORTFOLIO_SEED");

        let config = Config::from_env();

        assert_eq!(config.db_path, PathBuf::from("./data/portfolio.sqlite"));
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8001");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.seed_on_start);
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }
}
