//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::app::BrowserSettings;
use crate::catalog::{Linearization, DEFAULT_PAGE_SIZE};
use crate::source::{PokeApiConfig, DEFAULT_BASE_URL, DEFAULT_LIST_LIMIT};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub favorites: FavoritesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Entries requested by the bulk load
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,

    /// Unset means requests never time out
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_list_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

fn default_user_agent() -> String {
    format!("pokedex/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            list_limit: default_list_limit(),
            request_timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    pub fn to_client_config(&self) -> PokeApiConfig {
        PokeApiConfig {
            base_url: self.base_url.clone(),
            request_timeout_ms: self.request_timeout_secs.map(|s| s * 1000),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Browser behavior
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Moves listed in the detail panel
    #[serde(default = "default_moves_shown")]
    pub moves_shown: usize,

    #[serde(default)]
    pub evolution: Linearization,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_moves_shown() -> usize {
    10
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            moves_shown: default_moves_shown(),
            evolution: Linearization::default(),
        }
    }
}

/// Favorites persistence
#[derive(Debug, Clone, Deserialize)]
pub struct FavoritesConfig {
    #[serde(default = "default_favorites_path")]
    pub path: String,
}

fn default_favorites_path() -> String {
    dirs::data_local_dir()
        .map(|p| {
            p.join("pokedex")
                .join("favorites.json")
                .to_string_lossy()
                .to_string()
        })
        .unwrap_or_else(|| "./pokedex_favorites.json".to_string())
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            path: default_favorites_path(),
        }
    }
}

impl FavoritesConfig {
    /// Path with a leading `~/` expanded
    pub fn resolved_path(&self) -> PathBuf {
        match (self.path.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.path),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("pokedex").join("config.toml")),
            Some(PathBuf::from("./pokedex.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// An explicit path must load; otherwise fall back to the defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Browser settings derived from the `[api]` and `[browser]` sections
    pub fn to_settings(&self) -> BrowserSettings {
        BrowserSettings {
            page_size: self.browser.page_size.max(1),
            list_limit: self.api.list_limit,
            moves_shown: self.browser.moves_shown,
            evolution: self.browser.evolution,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `POKEDEX_*` overrides; unparsable numbers are ignored
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("POKEDEX_API_URL") {
            self.api.base_url = url;
        }
        if let Some(path) = var("POKEDEX_FAVORITES_PATH") {
            self.favorites.path = path;
        }
        if let Some(size) = var("POKEDEX_PAGE_SIZE") {
            match size.parse() {
                Ok(n) => self.browser.page_size = n,
                Err(_) => tracing::warn!("Ignoring POKEDEX_PAGE_SIZE={:?}", size),
            }
        }
        if let Some(level) = var("POKEDEX_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("POKEDEX_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Pokedex Configuration
#
# Environment variables override these settings:
# - POKEDEX_API_URL
# - POKEDEX_FAVORITES_PATH
# - POKEDEX_PAGE_SIZE
# - POKEDEX_LOG_LEVEL
# - POKEDEX_LOG_FORMAT

[api]
# PokeAPI base URL
base_url = "https://pokeapi.co/api/v2"

# Number of entries fetched at startup
list_limit = 1000

# Request timeout in seconds (unset waits indefinitely)
# request_timeout_secs = 30

[browser]
# Cards per page
page_size = 20

# Moves listed in the detail panel
moves_shown = 10

# Evolution display: first_branch or all_branches
evolution = "first_branch"

[favorites]
# JSON file holding the favorites set
path = "~/.local/share/pokedex/favorites.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path (stderr when unset)
# file = "/tmp/pokedex.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.list_limit, 1000);
        assert_eq!(config.api.request_timeout_secs, None);
        assert_eq!(config.browser.page_size, 20);
        assert_eq!(config.browser.evolution, Linearization::FirstBranch);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse(
            r#"
[browser]
page_size = 12
evolution = "all_branches"
"#,
        )
        .unwrap();
        assert_eq!(config.browser.page_size, 12);
        assert_eq!(config.browser.moves_shown, 10);
        assert_eq!(config.browser.evolution, Linearization::AllBranches);
        assert_eq!(config.api.list_limit, DEFAULT_LIST_LIMIT);

        let settings = config.to_settings();
        assert_eq!(settings.page_size, 12);
        assert_eq!(settings.evolution, Linearization::AllBranches);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("POKEDEX_API_URL", "http://localhost:9000/api/v2"),
            ("POKEDEX_PAGE_SIZE", "50"),
            ("POKEDEX_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.api.base_url, "http://localhost:9000/api/v2");
        assert_eq!(config.browser.page_size, 50);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_bad_page_size_env_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|k| (k == "POKEDEX_PAGE_SIZE").then(|| "lots".to_string()));
        assert_eq!(config.browser.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_timeout_converts_to_millis() {
        let mut config = Config::default();
        config.api.request_timeout_secs = Some(5);
        assert_eq!(config.api.to_client_config().request_timeout_ms, Some(5000));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pokedex.toml");
        std::fs::write(&path, "[browser]\npage_size = \"many\"\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
        assert!(matches!(
            Config::load(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_tilde_expansion() {
        let favorites = FavoritesConfig {
            path: "~/favs.json".into(),
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(favorites.resolved_path(), home.join("favs.json"));
        }
    }
}
