//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dispatch::payload::AJAX_PATH;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which payload shape a delegated click produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Binding {
    /// `state=<page_state>` for every click
    #[default]
    PageState,
    /// `id=<command code>` derived from the clicked icon
    Icon,
}

impl std::str::FromStr for Binding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page-state" => Ok(Binding::PageState),
            "icon" => Ok(Binding::Icon),
            other => Err(ConfigError::Invalid(format!("unknown binding: {}", other))),
        }
    }
}

/// Client fragment configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub binding: Binding,

    #[serde(default = "default_page_state")]
    pub page_state: String,

    /// Send the clicked row's identifier as `row`
    #[serde(default)]
    pub include_row_id: bool,

    /// Request menu items as soon as the page is ready
    #[serde(default = "default_bootstrap_menus")]
    pub bootstrap_menus: bool,

    #[serde(default = "default_container_selector")]
    pub container_selector: String,

    #[serde(default = "default_delegate_selector")]
    pub delegate_selector: String,

    #[serde(default = "default_left_mount_id")]
    pub left_mount_id: String,

    #[serde(default = "default_right_mount_id")]
    pub right_mount_id: String,

    #[serde(default = "default_left_item_class")]
    pub left_item_class: String,

    #[serde(default = "default_right_item_class")]
    pub right_item_class: String,
}

fn default_endpoint() -> String {
    AJAX_PATH.to_string()
}

fn default_page_state() -> String {
    "admin-home".to_string()
}

fn default_bootstrap_menus() -> bool {
    true
}

fn default_container_selector() -> String {
    "body".to_string()
}

fn default_delegate_selector() -> String {
    "td".to_string()
}

fn default_left_mount_id() -> String {
    "menuItemsLeft".to_string()
}

fn default_right_mount_id() -> String {
    "menuItemsRight".to_string()
}

fn default_left_item_class() -> String {
    "mdl-navigation__link".to_string()
}

fn default_right_item_class() -> String {
    "mdl-menu__item".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            binding: Binding::default(),
            page_state: default_page_state(),
            include_row_id: false,
            bootstrap_menus: default_bootstrap_menus(),
            container_selector: default_container_selector(),
            delegate_selector: default_delegate_selector(),
            left_mount_id: default_left_mount_id(),
            right_mount_id: default_right_mount_id(),
            left_item_class: default_left_item_class(),
            right_item_class: default_right_item_class(),
        }
    }
}

/// Account role the stand-in server answers for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    User,
}

/// Stand-in `/ajax` server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub role: Role,

    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Directory served under `/static`
    pub static_dir: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_user_name() -> String {
    "admin".to_string()
}

impl ServerConfig {
    /// Socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            role: Role::default(),
            user_name: default_user_name(),
            static_dir: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// stamped, pretty or json
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "stamped".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
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
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("photobook").join("config.toml")),
            Some(PathBuf::from("/etc/photobook/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Client overrides
        if let Ok(endpoint) = std::env::var("PHOTOBOOK_ENDPOINT") {
            self.client.endpoint = endpoint;
        }
        if let Ok(binding) = std::env::var("PHOTOBOOK_BINDING") {
            match binding.parse() {
                Ok(b) => self.client.binding = b,
                Err(e) => tracing::warn!("Ignoring PHOTOBOOK_BINDING: {}", e),
            }
        }
        if let Ok(flag) = std::env::var("PHOTOBOOK_INCLUDE_ROW_ID") {
            self.client.include_row_id = flag.to_lowercase() != "false" && flag != "0";
        }

        // Server overrides
        if let Ok(host) = std::env::var("PHOTOBOOK_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PHOTOBOOK_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(dir) = std::env::var("PHOTOBOOK_STATIC_DIR") {
            self.server.static_dir = Some(dir);
        }

        // Logging overrides
        if let Ok(level) = std::env::var("PHOTOBOOK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("PHOTOBOOK_LOG_FORMAT") {
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

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Photobook Configuration
#
# Environment variables override these settings:
# - PHOTOBOOK_ENDPOINT
# - PHOTOBOOK_BINDING
# - PHOTOBOOK_INCLUDE_ROW_ID
# - PHOTOBOOK_HOST
# - PHOTOBOOK_PORT
# - PHOTOBOOK_STATIC_DIR
# - PHOTOBOOK_LOG_LEVEL
# - PHOTOBOOK_LOG_FORMAT

[client]
# Endpoint every interaction posts to
endpoint = "/ajax"

# Click payload: "page-state" sends state=<page_state>, "icon" sends id=<code>
binding = "page-state"
page_state = "admin-home"

# Also send the clicked row's identifier as "row"
include_row_id = false

# Request menu items once the page is ready
bootstrap_menus = true

# Delegated listener: bound on the container, reacts to clicks inside matches
container_selector = "body"
delegate_selector = "td"

# Menu mount points and item classes
left_mount_id = "menuItemsLeft"
right_mount_id = "menuItemsRight"
left_item_class = "mdl-navigation__link"
right_item_class = "mdl-menu__item"

[server]
host = "127.0.0.1"
port = 8080

# Menus answered by the stand-in server: "admin" or "user"
role = "admin"
user_name = "admin"

# Optional directory served under /static
# static_dir = "tmpl/mdl/static"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: stamped, pretty or json
format = "stamped"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_round_trips() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.client, ClientConfig::default());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.role, Role::Admin);
        assert_eq!(config.logging.format, "stamped");
    }

    // Tests that touch PHOTOBOOK_* variables hold this lock.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    const ENV_VARS: [&str; 4] = [
        "PHOTOBOOK_BINDING",
        "PHOTOBOOK_INCLUDE_ROW_ID",
        "PHOTOBOOK_PORT",
        "PHOTOBOOK_LOG_FORMAT",
    ];

    fn with_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        let result = f();
        for key in ENV_VARS {
            std::env::remove_var(key);
        }
        result
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = with_env(
            &[
                ("PHOTOBOOK_BINDING", "icon"),
                ("PHOTOBOOK_INCLUDE_ROW_ID", "true"),
                ("PHOTOBOOK_PORT", "9090"),
                ("PHOTOBOOK_LOG_FORMAT", "json"),
            ],
            Config::from_env,
        );
        assert_eq!(config.client.binding, Binding::Icon);
        assert!(config.client.include_row_id);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_env_overrides_file_and_ignores_bad_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[client]\nbinding = \"icon\"\ninclude_row_id = true\n[server]\nport = 7000").unwrap();

        for off in ["0", "false", "FALSE"] {
            let config = with_env(
                &[
                    ("PHOTOBOOK_BINDING", "menu"),
                    ("PHOTOBOOK_INCLUDE_ROW_ID", off),
                    ("PHOTOBOOK_PORT", "not-a-port"),
                ],
                || Config::load_with_env(file.path()).unwrap(),
            );
            assert_eq!(config.client.binding, Binding::Icon, "value {}", off);
            assert!(!config.client.include_row_id, "value {}", off);
            assert_eq!(config.server.port, 7000);
        }
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[client]\nbinding = \"icon\"\ninclude_row_id = true").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.client.binding, Binding::Icon);
        assert!(config.client.include_row_id);
        assert_eq!(config.client.endpoint, "/ajax");
        assert_eq!(config.client.left_mount_id, "menuItemsLeft");
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/photobook.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[client\nbinding = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_binding_from_str() {
        assert_eq!("icon".parse::<Binding>().unwrap(), Binding::Icon);
        assert_eq!("page-state".parse::<Binding>().unwrap(), Binding::PageState);
        assert!("menu".parse::<Binding>().is_err());
    }

    #[test]
    fn test_client_config_from_json() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"binding": "icon", "bootstrap_menus": false}"#).unwrap();
        assert_eq!(config.binding, Binding::Icon);
        assert!(!config.bootstrap_menus);
        assert_eq!(config.delegate_selector, "td");
    }
}
