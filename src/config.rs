//! Helper configuration
//!
//! Settings shared by the I/O helpers: where uploads go, which timezone
//! names the date partitions, and how the HTTP helper behaves. Values come
//! from defaults, a TOML file, or `EVERYBOT_*` environment variables.

use crate::error::{Error, Result};
use crate::timeutil::parse_utc_offset;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const ENV_UPLOAD_DIR: &str = "EVERYBOT_UPLOAD_DIR";
pub const ENV_TIMEZONE: &str = "EVERYBOT_TIMEZONE";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "EVERYBOT_HTTP_TIMEOUT_SECS";
pub const ENV_PROXY: &str = "EVERYBOT_PROXY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpersConfig {
    /// Root directory for stored uploads
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// UTC offset used for upload date partitions, e.g. "+08:00"
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Whole-request timeout for the HTTP helper
    #[serde(with = "humantime_serde", default = "default_http_timeout")]
    pub http_timeout: Duration,

    /// Default proxy for outbound requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("storage/uploads/files")
}

fn default_timezone() -> String {
    "+00:00".to_string()
}

fn default_http_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Default for HelpersConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            timezone: default_timezone(),
            http_timeout: default_http_timeout(),
            proxy: None,
        }
    }
}

impl HelpersConfig {
    /// Create configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_UPLOAD_DIR) {
            config.upload_dir = PathBuf::from(dir);
        }
        if let Some(tz) = lookup(ENV_TIMEZONE) {
            config.timezone = tz;
        }
        if let Some(secs) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::Config(format!("{ENV_HTTP_TIMEOUT_SECS} must be a number of seconds, got {secs:?}"))
            })?;
            config.http_timeout = Duration::from_secs(secs);
        }
        config.proxy = lookup(ENV_PROXY).filter(|p| !p.trim().is_empty());

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading helpers config from {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// The configured timezone as a fixed offset.
    pub fn utc_offset(&self) -> Result<FixedOffset> {
        parse_utc_offset(&self.timezone)
    }

    pub fn validate(&self) -> Result<()> {
        self.utc_offset()?;
        if self.http_timeout.is_zero() {
            return Err(Error::Config("http_timeout must be greater than zero".to_string()));
        }
        if self.upload_dir.as_os_str().is_empty() {
            return Err(Error::Config("upload_dir must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = HelpersConfig::default();
        assert_eq!(config.upload_dir, PathBuf::from("storage/uploads/files"));
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.utc_offset().unwrap().local_minus_utc(), 0);
        assert!(config.proxy.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = HelpersConfig::from_lookup(lookup_from(&[
            (ENV_UPLOAD_DIR, "/srv/uploads"),
            (ENV_TIMEZONE, "+08:00"),
            (ENV_HTTP_TIMEOUT_SECS, "5"),
            (ENV_PROXY, "http://127.0.0.1:7890"),
        ]))
        .unwrap();

        assert_eq!(config.upload_dir, PathBuf::from("/srv/uploads"));
        assert_eq!(config.utc_offset().unwrap().local_minus_utc(), 8 * 3600);
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.proxy.as_deref(), Some("http://127.0.0.1:7890"));
    }

    #[test]
    fn test_from_lookup_blank_proxy_is_unset() {
        let config = HelpersConfig::from_lookup(lookup_from(&[(ENV_PROXY, "  ")])).unwrap();
        assert!(config.proxy.is_none());
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        assert!(HelpersConfig::from_lookup(lookup_from(&[(ENV_HTTP_TIMEOUT_SECS, "soon")])).is_err());
        assert!(HelpersConfig::from_lookup(lookup_from(&[(ENV_HTTP_TIMEOUT_SECS, "0")])).is_err());
        assert!(HelpersConfig::from_lookup(lookup_from(&[(ENV_TIMEZONE, "Mars/Olympus")])).is_err());
    }

    #[test]
    fn test_load_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("helpers.toml");
        std::fs::write(
            &path,
            r#"
upload_dir = "data/uploads"
timezone = "-05:00"
http_timeout = "1m 30s"
"#,
        )
        .unwrap();

        let config = HelpersConfig::load(&path).unwrap();
        assert_eq!(config.upload_dir, PathBuf::from("data/uploads"));
        assert_eq!(config.http_timeout, Duration::from_secs(90));
        assert_eq!(config.utc_offset().unwrap().local_minus_utc(), -5 * 3600);
        assert!(config.proxy.is_none());
    }

    #[test]
    fn test_load_partial_toml_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("helpers.toml");
        std::fs::write(&path, "proxy = \"socks5://localhost:1080\"\n").unwrap();

        let config = HelpersConfig::load(&path).unwrap();
        assert_eq!(config.upload_dir, default_upload_dir());
        assert_eq!(config.proxy.as_deref(), Some("socks5://localhost:1080"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("helpers.toml");
        std::fs::write(&path, "upload_dir = [").unwrap();

        assert!(matches!(HelpersConfig::load(&path), Err(Error::Toml(_))));
    }
}
