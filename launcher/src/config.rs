//! Launcher configuration from environment variables or a YAML file

use anyhow::{Context, Result};
use common::ConfigExt;
use serde::Deserialize;
use std::path::Path;

/// Port Odoo listens on when `ODOO_EXPOSED_PORT` is not set
pub const DEFAULT_PORT: u16 = 8069;

/// Language the new database is initialized with
pub const DEFAULT_LOCALE: &str = "es_ES";

/// Configuration for a single deployment
///
/// Credentials are `None` when absent or empty. Constructed once and only
/// ever borrowed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_name: Option<String>,
    pub master_password: Option<String>,
    pub user_name: Option<String>,
    pub user_password: Option<String>,
    pub port: u16,
    pub locale: String,
    pub colored_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_name: None,
            master_password: None,
            user_name: None,
            user_password: None,
            port: DEFAULT_PORT,
            locale: DEFAULT_LOCALE.to_string(),
            colored_output: true,
        }
    }
}

/// On-disk layout, every key optional
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    db_name: Option<String>,
    master_password: Option<String>,
    user_name: Option<String>,
    user_password: Option<String>,
    port: Option<u16>,
    locale: Option<String>,
    colored_output: Option<bool>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            db_name: String::env_opt("INITIAL_DB_NAME"),
            master_password: String::env_opt("INITIAL_DB_MASTER_PASS"),
            user_name: String::env_opt("INITIAL_DB_USER"),
            user_password: String::env_opt("INITIAL_DB_USER_PASS"),
            port: u16::env_parse("ODOO_EXPOSED_PORT", DEFAULT_PORT),
            locale: String::env_or("ODOO_LOCALE", DEFAULT_LOCALE),
            colored_output: bool::env_bool("COLORED_OUTPUT", true),
        }
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn from_yaml(content: &str) -> Result<Self> {
        let file: FileConfig = serde_yaml::from_str(content)?;
        let defaults = Self::default();

        Ok(Self {
            db_name: non_empty(file.db_name),
            master_password: non_empty(file.master_password),
            user_name: non_empty(file.user_name),
            user_password: non_empty(file.user_password),
            port: file.port.unwrap_or(defaults.port),
            locale: non_empty(file.locale).unwrap_or(defaults.locale),
            colored_output: file.colored_output.unwrap_or(defaults.colored_output),
        })
    }

    /// Database name, master password and user password, if all are present
    pub fn creation_credentials(&self) -> Option<(&str, &str, &str)> {
        Some((
            self.db_name.as_deref()?,
            self.master_password.as_deref()?,
            self.user_password.as_deref()?,
        ))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_maps_variables() {
        std::env::set_var("INITIAL_DB_NAME", "acme");
        std::env::set_var("INITIAL_DB_MASTER_PASS", "m");
        std::env::set_var("INITIAL_DB_USER", "owner");
        std::env::set_var("INITIAL_DB_USER_PASS", "");
        std::env::set_var("ODOO_EXPOSED_PORT", "8070");
        std::env::set_var("ODOO_LOCALE", "en_US");
        std::env::set_var("COLORED_OUTPUT", "false");

        let config = Config::from_env();

        assert_eq!(config.db_name.as_deref(), Some("acme"));
        assert_eq!(config.master_password.as_deref(), Some("m"));
        assert_eq!(config.user_name.as_deref(), Some("owner"));
        assert_eq!(config.user_password, None);
        assert_eq!(config.port, 8070);
        assert_eq!(config.locale, "en_US");
        assert!(!config.colored_output);
        assert!(config.creation_credentials().is_none());
    }

    #[test]
    fn test_yaml_fills_defaults() {
        let config = Config::from_yaml("db_name: acme\nmaster_password: m\n").unwrap();
        assert_eq!(config.db_name.as_deref(), Some("acme"));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.locale, DEFAULT_LOCALE);
        assert!(config.colored_output);
        assert_eq!(config.user_password, None);
    }

    #[test]
    fn test_yaml_empty_strings_are_absent() {
        let config = Config::from_yaml(
            "db_name: acme\nmaster_password: ''\nuser_password: p\nport: 8070\nlocale: en_US\n",
        )
        .unwrap();
        assert_eq!(config.master_password, None);
        assert_eq!(config.port, 8070);
        assert_eq!(config.locale, "en_US");
        assert!(config.creation_credentials().is_none());
    }

    #[test]
    fn test_yaml_rejects_unknown_keys() {
        assert!(Config::from_yaml("database: acme\n").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Config::from_file("/nonexistent/launcher.yml").is_err());
    }

    #[test]
    fn test_creation_credentials_require_all_three() {
        let config = Config {
            db_name: Some("acme".into()),
            master_password: Some("m".into()),
            user_password: Some("p".into()),
            ..Config::default()
        };
        assert_eq!(config.creation_credentials(), Some(("acme", "m", "p")));

        let config = Config {
            db_name: None,
            ..config
        };
        assert!(config.creation_credentials().is_none());
    }
}
