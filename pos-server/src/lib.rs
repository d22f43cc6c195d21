//! Coffee POS Server
//!
//! Point-of-sale backend for a small coffee retail business: user,
//! catalog, customer, payment-method and order management plus revenue
//! reporting over a SQLite store.
//!
//! # Module structure
//!
//! ```text
//! pos-server/src/
//! ├── core/      # configuration, state, server startup
//! ├── auth/      # JWT authentication, argon2 passwords, middleware
//! ├── api/       # HTTP routes and handlers
//! ├── db/        # SQLite pool, migrations, repositories
//! ├── reports/   # report windows and calendar bucketing
//! └── utils/     # errors, logging, time and validation helpers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod reports;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::{AppError, AppResult};

/// Load .env and initialize logging from LOG_LEVEL / LOG_DIR.
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
