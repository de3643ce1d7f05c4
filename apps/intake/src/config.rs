use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Where the application collection is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// JSON document at `<storage_dir>/<storage_key>.json`.
    File,
    /// Process memory; everything is lost on restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => bail!("unknown storage backend '{other}' (expected 'file' or 'memory')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub storage_backend: StorageBackend,
    /// Directory holding storage documents.
    pub storage_dir: PathBuf,
    /// Key of the application collection inside `storage_dir`.
    pub storage_key: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            bind_addr: get("BIND_ADDR", "0.0.0.0")
                .parse()
                .context("BIND_ADDR must be a valid IP address")?,
            port: get("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            storage_backend: get("STORAGE_BACKEND", "file")
                .parse()
                .context("STORAGE_BACKEND is invalid")?,
            storage_dir: PathBuf::from(get("STORAGE_DIR", "data")),
            storage_key: get("STORAGE_KEY", "sketure_apps_v1"),
            rust_log: get("RUST_LOG", "info"),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0");
        assert_eq!(config.storage_dir, PathBuf::from("data"));
        assert_eq!(config.storage_key, "sketure_apps_v1");
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.storage_backend, StorageBackend::File);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("BIND_ADDR", "127.0.0.1"),
            ("STORAGE_DIR", "/var/lib/intake"),
            ("STORAGE_KEY", "apps"),
            ("STORAGE_BACKEND", "Memory"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1");
        assert_eq!(config.storage_dir, PathBuf::from("/var/lib/intake"));
        assert_eq!(config.storage_key, "apps");
        assert_eq!(config.storage_backend, StorageBackend::Memory);
    }

    #[test]
    fn test_unknown_backend_is_an_error() {
        assert!(config_from(&[("STORAGE_BACKEND", "redis")]).is_err());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_bind_addr_is_an_error() {
        assert!(config_from(&[("BIND_ADDR", "localhost:80")]).is_err());
    }
}
