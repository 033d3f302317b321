use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, LOG_FILE_NAME, env_vars, hosts};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_default_whitelist_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Host of the JSON lookup API, queried first.
    #[serde(default = "default_json_api_domain")]
    pub json_api_domain: String,
    /// Host of the page exposing `uuid_formatted`, queried second.
    #[serde(default = "default_api_scrape_domain")]
    pub api_scrape_domain: String,
    /// Host of the HTML search page, queried last.
    #[serde(default = "default_html_scrape_domain")]
    pub html_scrape_domain: String,
    /// Path to the whitelist file. Defaults to `whitelist.json` in the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelist_path: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for each lookup request. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_json_api_domain() -> String {
    hosts::JSON_API.to_string()
}

fn default_api_scrape_domain() -> String {
    hosts::API_SCRAPE.to_string()
}

fn default_html_scrape_domain() -> String {
    hosts::HTML_SCRAPE.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            json_api_domain: default_json_api_domain(),
            api_scrape_domain: default_api_scrape_domain(),
            html_scrape_domain: default_html_scrape_domain(),
            whitelist_path: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file means built-in defaults. Environment variables override
    /// file values.
    ///
    /// # Environment Variables
    /// - `CUSTOM_WHITELIST_JSON_API_DOMAIN` - Override JSON API host
    /// - `CUSTOM_WHITELIST_API_SCRAPE_DOMAIN` - Override API-style page host
    /// - `CUSTOM_WHITELIST_HTML_SCRAPE_DOMAIN` - Override HTML search page host
    /// - `CUSTOM_WHITELIST_WHITELIST_PATH` - Override whitelist file path
    /// - `CUSTOM_WHITELIST_LOG_FILE` - Override log file path
    /// - `CUSTOM_WHITELIST_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Overrides fields from `CUSTOM_WHITELIST_*` environment variables.
    /// An unparseable timeout value is ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(domain) = std::env::var(env_vars::JSON_API_DOMAIN) {
            self.json_api_domain = domain;
        }

        if let Ok(domain) = std::env::var(env_vars::API_SCRAPE_DOMAIN) {
            self.api_scrape_domain = domain;
        }

        if let Ok(domain) = std::env::var(env_vars::HTML_SCRAPE_DOMAIN) {
            self.html_scrape_domain = domain;
        }

        if let Ok(path) = std::env::var(env_vars::WHITELIST_PATH) {
            self.whitelist_path = Some(path);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &[
                ("json_api_domain", &self.json_api_domain),
                ("api_scrape_domain", &self.api_scrape_domain),
                ("html_scrape_domain", &self.html_scrape_domain),
            ],
            self.http_timeout_seconds,
            &self.whitelist_path,
            &self.log_file_path,
        )
    }

    /// Whitelist file in effect: the configured path or the default location.
    pub fn effective_whitelist_path(&self) -> String {
        self.whitelist_path
            .clone()
            .unwrap_or_else(get_default_whitelist_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Shows the defaults in effect when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Lookup Sources (in query order):");
        println!("{}", config.json_api_domain);
        println!("{}", config.api_scrape_domain);
        println!("{}", config.html_scrape_domain);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Whitelist File:");
        println!("{}", config.effective_whitelist_path());
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
