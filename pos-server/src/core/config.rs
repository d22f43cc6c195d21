use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Server configuration - every setting the process reads from the
/// environment, captured once at startup and passed around immutably.
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/coffee-pos | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP service port |
/// | DATABASE_PATH | <work_dir>/database/pos.db | SQLite database file |
/// | TIMEZONE | Asia/Ho_Chi_Minh | Business timezone for report buckets |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | ADMIN_USERNAME | admin | Bootstrap administrator username |
/// | ADMIN_EMAIL | admin@localhost | Bootstrap administrator email |
/// | ADMIN_PASSWORD | (unset) | Bootstrap administrator password; no admin is created when unset |
///
/// JWT settings are read by [`JwtConfig`] (`JWT_SECRET`, `JWT_EXPIRATION_MINUTES`, ...).
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and log files
    pub work_dir: String,
    /// HTTP API service port
    pub http_port: u16,
    /// Optional explicit database file path (overrides work_dir layout)
    pub database_path: Option<String>,
    /// Business timezone used for "today" and report bucket boundaries
    pub timezone: chrono_tz::Tz,
    /// JWT authentication configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Bootstrap administrator account
    pub admin_username: String,
    pub admin_email: String,
    /// When unset, no administrator is bootstrapped
    pub admin_password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let timezone = std::env::var("TIMEZONE")
            .ok()
            .and_then(|name| match name.parse::<chrono_tz::Tz>() {
                Ok(tz) => Some(tz),
                Err(_) => {
                    tracing::warn!(timezone = %name, "Unknown TIMEZONE, falling back to Asia/Ho_Chi_Minh");
                    None
                }
            })
            .unwrap_or(chrono_tz::Asia::Ho_Chi_Minh);

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/coffee-pos".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH").ok(),
            timezone,
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_email: std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@localhost".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        }
    }

    /// Override work dir and port, commonly used in tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.database_path = None;
        config.http_port = http_port;
        config
    }

    /// Directory holding the SQLite database file.
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Full path of the SQLite database file.
    pub fn database_file(&self) -> PathBuf {
        match &self.database_path {
            Some(path) => PathBuf::from(path),
            None => self.database_dir().join("pos.db"),
        }
    }

    /// Create the work directory layout if missing.
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(PathBuf::from(&self.work_dir).join("logs"))?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
