use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::db;
use crate::users::password::Argon2Hasher;
use crate::users::repo::PgUserRepository;
use crate::users::services::UserService;

/// Shared application state: one pool and one service graph, built at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub users: UserService,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config.database).await?;
        Ok(Self::from_parts(db, config))
    }

    /// Wire the service graph over an existing pool.
    pub fn from_parts(db: PgPool, config: Arc<AppConfig>) -> Self {
        let users = UserService::new(
            Arc::new(PgUserRepository::new(db.clone())),
            Arc::new(Argon2Hasher),
        );
        Self { db, config, users }
    }
}
