//! # commons-config
//!
//! Layered configuration loading for the commons site backend using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COMMONS_*` prefix, `__` as separator)
//! 2. `commons.toml` in the working directory
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `COMMONS_CMS__TOKEN` -> `cms.token`,
//! `COMMONS_SMTP__APP_PASSWORD` -> `smtp.app_password`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use commons_config::SiteConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = SiteConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = SiteConfig::load().expect("config");
//!
//! if config.cms.is_configured() {
//!     println!("CMS endpoint: {}", config.cms.api_base_url());
//! }
//! ```

mod cms;
mod error;
mod general;
mod revalidate;
mod smtp;

pub use cms::{CmsConfig, ContentVersion};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use revalidate::RevalidateConfig;
pub use smtp::SmtpConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The TOML config file looked up in the working directory.
pub const CONFIG_FILE: &str = "commons.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub cms: CmsConfig,
    #[serde(default)]
    pub revalidate: RevalidateConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SiteConfig {
    /// Load configuration from all sources (TOML file + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`COMMONS_*` prefix)
    /// 2. `commons.toml` (working directory)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails or a value fails
    /// validation (unknown region or content version).
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load a `.env` file from the working directory (or
    /// the nearest ancestor) before building the figment. This is the typical
    /// entry point for the server binary and tests.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: working-directory config file
        let local_path = PathBuf::from(CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 2: environment variables (highest priority)
        figment.merge(Env::prefixed("COMMONS_").split("__"))
    }

    /// Validate cross-field constraints that figment cannot express.
    fn validate(&self) -> Result<(), ConfigError> {
        self.cms.validate()?;
        self.general.validate()
    }

    /// Load `.env` from the working directory or the nearest ancestor.
    ///
    /// Silently does nothing if no `.env` is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
