//! Configuration management for the portfolio using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::SortOrder;

/// Default bind address for `serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

/// Default site title shown in the page `<title>`.
pub const DEFAULT_SITE_TITLE: &str = "Portfolio";

/// Application settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the web server binds to.
    pub bind: String,
    /// Path prefix the site is mounted under (e.g. "/portfolio"). Empty for root.
    pub base_path: String,
    /// Content dataset override. `None` uses the builtin content.
    pub content_path: Option<PathBuf>,
    /// Default ordering of the artifact catalog.
    pub catalog_order: SortOrder,
    /// Site title shown in the browser tab.
    pub site_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            base_path: String::new(),
            content_path: None,
            catalog_order: SortOrder::default(),
            site_title: DEFAULT_SITE_TITLE.to_string(),
        }
    }
}

impl Settings {
    /// Build an absolute-from-site-root URL for `path` (which starts with '/').
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }
}

/// Normalize a base path: leading slash, no trailing slash, "" for root.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, prefer::FromValue)]
pub struct Config {
    /// Bind address ("host:port", "port" or "host").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// Path prefix the site is served under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// Content dataset file (toml, yaml or json).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Default catalog ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_order: Option<SortOrder>,
    /// Site title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    #[prefer(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers portfolio config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("portfolio").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("{}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(_) => {
                tracing::debug!("No portfolio config file found, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
        };

        config.source_path = Some(path.to_path_buf());
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the base directory for resolving relative paths.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(ref base_path) = self.base_path {
            settings.base_path = normalize_base_path(base_path);
        }
        if let Some(ref content) = self.content {
            settings.content_path = Some(self.resolve_path(content, base_dir));
        }
        if let Some(order) = self.catalog_order {
            settings.catalog_order = order;
        }
        if let Some(ref title) = self.site_title {
            settings.site_title = title.clone();
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Content dataset path (overrides config and environment).
    pub content: Option<PathBuf>,
}

fn env_override(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Load settings with explicit options.
/// Returns (Settings, Config) tuple.
pub async fn load_settings_with_options(options: LoadOptions) -> (Settings, Config) {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path).await.unwrap_or_else(|e| {
            tracing::warn!("{}; using defaults", e);
            Config::default()
        }),
        None => Config::load().await,
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let base_dir = config.base_dir().unwrap_or_else(|| cwd.clone());

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings, &base_dir);

    // Environment variables take precedence over the config file
    if let Some(bind) = env_override("PORTFOLIO_BIND") {
        tracing::debug!("Using PORTFOLIO_BIND from environment: {}", bind);
        settings.bind = bind;
    }
    if let Some(base_path) = env_override("PORTFOLIO_BASE_PATH") {
        settings.base_path = normalize_base_path(&base_path);
    }
    if let Some(content) = env_override("PORTFOLIO_CONTENT") {
        settings.content_path = Some(config.resolve_path(&content, &cwd));
    }

    // --content flag takes highest precedence
    if let Some(content) = options.content {
        settings.content_path = Some(if content.is_absolute() {
            content
        } else {
            cwd.join(content)
        });
    }

    (settings, config)
}
