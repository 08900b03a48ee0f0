use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default MediaWiki query endpoint (Wikimedia Commons).
pub const DEFAULT_API_ENDPOINT: &str = "https://commons.wikimedia.org/w/api.php";

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = "cwa/0.1 (Commons attribution tool)";

/// Global configuration loaded from `~/.config/cwa/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CwaConfig {
    /// MediaWiki API endpoint to query.
    pub api_endpoint: String,
    /// Requested thumbnail width in pixels (`iiurlwidth`).
    pub thumb_width: u32,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Optional User-Agent override for API requests.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for CwaConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            thumb_width: 300,
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl CwaConfig {
    /// Effective User-Agent: the configured override or the built-in default.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cwa")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CwaConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CwaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CwaConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = CwaConfig::default();
        assert_eq!(cfg.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(cfg.thumb_width, 300);
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CwaConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CwaConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.api_endpoint, cfg.api_endpoint);
        assert_eq!(parsed.thumb_width, cfg.thumb_width);
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            api_endpoint = "https://mirror.example.org/w/api.php"
            thumb_width = 640
            connect_timeout_secs = 5
            request_timeout_secs = 10
            user_agent = "attribution-bot/2.0"
        "#;
        let cfg: CwaConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.api_endpoint, "https://mirror.example.org/w/api.php");
        assert_eq!(cfg.thumb_width, 640);
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.user_agent(), "attribution-bot/2.0");
    }

    #[test]
    fn config_toml_user_agent_optional() {
        let toml = r#"
            api_endpoint = "https://commons.wikimedia.org/w/api.php"
            thumb_width = 300
            connect_timeout_secs = 15
            request_timeout_secs = 30
        "#;
        let cfg: CwaConfig = toml::from_str(toml).unwrap();
        assert!(cfg.user_agent.is_none());
        assert_eq!(cfg.user_agent(), DEFAULT_USER_AGENT);
    }
}
