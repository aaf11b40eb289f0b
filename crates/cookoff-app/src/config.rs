//! Application configuration loaded from environment variables.
//!
//! All settings have sensible defaults so a host can start with zero
//! configuration.

use std::path::PathBuf;

use cookoff_shared::constants::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD, EMAIL_DOMAIN};
use cookoff_store::{Database, Result as StoreResult};

/// Host configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the database file.
    /// Env: `COOKOFF_DATA_DIR`
    /// Default: platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Required suffix for registration email addresses.
    /// Env: `COOKOFF_EMAIL_DOMAIN`
    /// Default: `@gmail.com`
    pub email_domain: String,

    /// Admin login email.
    /// Env: `COOKOFF_ADMIN_EMAIL`
    pub admin_email: String,

    /// Admin login password.
    /// Env: `COOKOFF_ADMIN_PASSWORD`
    pub admin_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            email_domain: EMAIL_DOMAIN.to_string(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("COOKOFF_DATA_DIR") {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Ok(domain) = std::env::var("COOKOFF_EMAIL_DOMAIN") {
            if !domain.is_empty() {
                config.email_domain = domain;
            }
        }

        if let Ok(email) = std::env::var("COOKOFF_ADMIN_EMAIL") {
            if !email.is_empty() {
                config.admin_email = email;
            }
        }

        if let Ok(password) = std::env::var("COOKOFF_ADMIN_PASSWORD") {
            if !password.is_empty() {
                config.admin_password = password;
            }
        }

        config
    }

    /// Open the database this configuration points at.
    pub fn open_database(&self) -> StoreResult<Database> {
        match &self.data_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                Database::open_at(&dir.join("cookoff.db"))
            }
            None => Database::new(),
        }
    }
}
