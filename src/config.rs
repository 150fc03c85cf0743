use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use dotenvy::dotenv;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MySql,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mysql" => Ok(StorageBackend::MySql),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(anyhow!("unknown storage backend `{}`", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub debug: bool,

    pub storage: StorageBackend,
    pub database_url: Option<String>,
    pub db_max_connections: u32,

    pub api_prefix: String,

    // 0 disables the limiter
    pub rate_limit_per_min: u32,

    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so tests do not have
    /// to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let storage: StorageBackend = var("STORAGE_BACKEND", "mysql").parse()?;
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        if storage == StorageBackend::MySql && database_url.is_none() {
            bail!("DATABASE_URL must be set when STORAGE_BACKEND is mysql");
        }

        Ok(Self {
            host: var("SERVER_HOST", "0.0.0.0"),
            port: parse_var("SERVER_PORT", &var("SERVER_PORT", "5000"))?,
            debug: var("DEBUG", "false").eq_ignore_ascii_case("true"),

            storage,
            database_url,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", &var("DB_MAX_CONNECTIONS", "10"))?,

            api_prefix: normalize_prefix(&var("API_PREFIX", "/api/v1")),

            rate_limit_per_min: parse_var("RATE_LIMIT_PER_MIN", &var("RATE_LIMIT_PER_MIN", "0"))?,

            log_dir: var("LOG_DIR", "logs"),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{} has an invalid value `{}`", key, raw))
}

/// "/api/v1/" and "api/v1" both become "/api/v1".
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_for_memory_backend() {
        let config = config_from(&[("STORAGE_BACKEND", "memory")]).unwrap();

        assert_eq!(config.server_addr(), "0.0.0.0:5000");
        assert!(!config.debug);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.database_url, None);
        assert_eq!(config.api_prefix, "/api/v1");
        assert_eq!(config.rate_limit_per_min, 0);
        assert_eq!(config.log_dir, "logs");
    }

    #[test]
    fn mysql_backend_requires_database_url() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));

        let config = config_from(&[("DATABASE_URL", "mysql://root@localhost/hospital")]).unwrap();
        assert_eq!(config.storage, StorageBackend::MySql);
        assert_eq!(config.db_max_connections, 10);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("STORAGE_BACKEND", "Memory"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("DEBUG", "True"),
            ("API_PREFIX", "api/v2/"),
            ("RATE_LIMIT_PER_MIN", "120"),
        ])
        .unwrap();

        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert!(config.debug);
        assert_eq!(config.api_prefix, "/api/v2");
        assert_eq!(config.rate_limit_per_min, 120);
    }

    #[test]
    fn rejects_bad_port_and_backend() {
        let err = config_from(&[("STORAGE_BACKEND", "memory"), ("SERVER_PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));

        assert!(config_from(&[("STORAGE_BACKEND", "postgres")]).is_err());
    }
}
