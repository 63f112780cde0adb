//! Configuration management for the `CivicPulse` client

use crate::types::TenantId;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Page behavior
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Page behavior configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tenant the submit form, issue list and dashboard start from
    #[serde(default = "default_tenant_id")]
    pub default_tenant_id: TenantId,

    /// `localStorage` key the tenant picker writes to
    #[serde(default = "default_tenant_storage_key")]
    pub tenant_storage_key: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions

/// Base URL baked in at build time through `CIVICPULSE_API_URL`, if set
fn default_base_url() -> String {
    option_env!("CIVICPULSE_API_URL")
        .unwrap_or("http://localhost:8000")
        .to_string()
}

const fn default_tenant_id() -> TenantId {
    1
}

fn default_tenant_storage_key() -> String {
    "selectedTenant".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_tenant_id: default_tenant_id(),
            tenant_storage_key: default_tenant_storage_key(),
        }
    }
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
    /// Load configuration from defaults, an optional `civicpulse` file and
    /// `CIVICPULSE__*` environment variables, in increasing priority
    ///
    /// In the browser there is neither a file system nor a process
    /// environment, so only the defaults (including the build-time base URL)
    /// apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::File::with_name("civicpulse").required(false))
            .add_source(
                config::Environment::with_prefix("CIVICPULSE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Layer a TOML document over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has mistyped
    /// values.
    pub fn from_toml(contents: &str) -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
