//! Server configuration
//!
//! Read from command-line flags with environment fallbacks:
//! - `CHECKLIST_BIND` listen address
//! - `USER` / `PASSWORD` the single Basic auth credential pair
//! - `APP_SETTINGS` development or production defaults
//! - `RUST_LOG` log filter override

use clap::{Parser, ValueEnum};
use std::net::{Ipv4Addr, SocketAddr};

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Deployment profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Settings {
    /// Verbose logs, human-readable output
    Development,
    /// Quieter logs, JSON output
    #[default]
    Production,
}

impl Settings {
    /// Log filter used when none is configured
    #[inline]
    #[must_use]
    pub fn default_log_filter(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Production => "info",
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No username configured
    #[error("no username configured (set --user or USER)")]
    MissingUser,

    /// No password configured
    #[error("no password configured (set --password or PASSWORD)")]
    MissingPassword,
}

/// The one accepted username/password pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Accepted username
    pub username: String,
    password: String,
}

impl Credentials {
    /// Create credential pair
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check a supplied pair
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Checklist API server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "checklist-server", version, about = "Checklist and profile REST API")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "CHECKLIST_BIND", default_value_t = SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)))]
    pub bind: SocketAddr,

    /// Basic auth username
    #[arg(long, env = "USER")]
    pub user: Option<String>,

    /// Basic auth password
    #[arg(long, env = "PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Deployment profile
    #[arg(long, env = "APP_SETTINGS", value_enum, default_value_t = Settings::Production)]
    pub settings: Settings,

    /// Log filter directive, e.g. `info,checklist_core=debug`
    #[arg(long = "log", env = "RUST_LOG")]
    pub log_filter: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            user: None,
            password: None,
            settings: Settings::default(),
            log_filter: None,
        }
    }
}

impl ServerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With listen address
    #[inline]
    #[must_use]
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    /// With credential pair
    #[inline]
    #[must_use]
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }

    /// With deployment profile
    #[inline]
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Effective log filter
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter
            .as_deref()
            .unwrap_or_else(|| self.settings.default_log_filter())
    }

    /// Configured credential pair
    ///
    /// # Errors
    /// `ConfigError` naming the first missing half of the pair
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let user = self.user.as_deref().ok_or(ConfigError::MissingUser)?;
        let password = self.password.as_deref().ok_or(ConfigError::MissingPassword)?;
        Ok(Credentials::new(user, password))
    }
}
