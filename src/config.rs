use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub uploads_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub api_rps: u32,
    pub cors_origin: Option<String>,
    pub seed_default_users: bool,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            database_max_connections: get_env_parse_or("DATABASE_MAX_CONNECTIONS", 10)?,
            uploads_dir: env::var("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./uploads")),
            max_upload_bytes: get_env_parse_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            api_rps: get_env_parse_or("API_RPS", 100)?,
            cors_origin: env::var("CORS_ORIGIN").ok().filter(|s| !s.trim().is_empty()),
            seed_default_users: get_env_parse_or("SEED_DEFAULT_USERS", false)?,
            log_format: get_env_parse_or("LOG_FORMAT", LogFormat::Text)?,
        })
    }

    /// Settings for tests and tools that build a router without the environment.
    pub fn for_database(database_url: impl Into<String>) -> Self {
        Self {
            server_address: "127.0.0.1:0".to_string(),
            database_url: database_url.into(),
            database_max_connections: 5,
            uploads_dir: env::temp_dir().join("hr-crm-uploads"),
            max_upload_bytes: 10 * 1024 * 1024,
            api_rps: 10_000,
            cors_origin: None,
            seed_default_users: false,
            log_format: LogFormat::Text,
        }
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_settings_point_at_given_database() {
        let config = Config::for_database("postgres://localhost/crm");
        assert_eq!(config.database_url, "postgres://localhost/crm");
        assert!(!config.seed_default_users);
        assert!(config.cors_origin.is_none());
    }
}
