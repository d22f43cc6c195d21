//! Server state
//!
//! [`ServerState`] holds the shared, cheaply-cloneable handles every
//! handler needs: the immutable configuration, the SQLite pool and the
//! JWT service. Handlers carry no other shared mutable state - each
//! request derives everything else (windows, "today", bucket sets) from
//! request-local values.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{JwtService, password};
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::user;
use crate::utils::{AppError, AppResult};
use shared::models::UserRole;

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration (immutable after startup)
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Initialize the server state:
    ///
    /// 1. Ensure the work directory layout exists
    /// 2. Open the database and run migrations
    /// 3. Build the JWT service
    /// 4. Bootstrap the administrator account when configured
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_file();
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let state = Self {
            config: config.clone(),
            pool: db_service.pool,
            jwt_service,
        };

        state.bootstrap_admin().await?;

        Ok(state)
    }

    /// Create the administrator account from ADMIN_* configuration if it
    /// does not exist yet. Without ADMIN_PASSWORD nothing is created.
    async fn bootstrap_admin(&self) -> AppResult<()> {
        let Some(admin_password) = &self.config.admin_password else {
            tracing::warn!("ADMIN_PASSWORD not set; skipping administrator bootstrap");
            return Ok(());
        };

        if user::find_by_username(&self.pool, &self.config.admin_username)
            .await
            .map_err(AppError::from)?
            .is_some()
        {
            return Ok(());
        }

        let password_hash = password::hash_password(admin_password)
            .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;

        let created = user::create(
            &self.pool,
            &self.config.admin_username,
            &self.config.admin_email,
            &password_hash,
            UserRole::Admin,
        )
        .await
        .map_err(AppError::from)?;

        tracing::info!(
            user_id = created.id,
            username = %created.username,
            "Administrator account bootstrapped"
        );
        Ok(())
    }
}
