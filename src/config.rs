use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Target subtitle/caption language code
    pub lang: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Netscape-format cookie jar passed through to yt-dlp
    pub cookie_file: Option<PathBuf>,
    /// Where per-request subtitle scratch directories are created
    pub work_dir: Option<PathBuf>,
    /// Upper bound on each fetch path, in seconds
    pub fetch_timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from ~/.config/yttd/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANG)
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn work_dir(&self) -> PathBuf {
        self.work_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub fn fetch_timeout_secs(&self) -> u64 {
        self.fetch_timeout_secs.unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("yttd")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
lang = "es"
host = "0.0.0.0"
port = 9090
cookie_file = "cookies.txt"
fetch_timeout_secs = 30
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lang(), "es");
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 9090);
        assert_eq!(config.cookie_file.as_deref(), Some(std::path::Path::new("cookies.txt")));
        assert_eq!(config.fetch_timeout_secs(), 30);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.lang(), "en");
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 8080);
        assert!(config.cookie_file.is_none());
        assert_eq!(config.fetch_timeout_secs(), 60);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(r#"lang = "fr""#).unwrap();
        assert_eq!(config.lang(), "fr");
        assert_eq!(config.port(), 8080);
    }
}
