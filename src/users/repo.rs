use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::users::repo_types::{NewUser, User};

/// Persistence capability for user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user row, returning the persisted record.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;
}

/// Postgres-backed repository over the shared pool.
pub struct PgUserRepository {
    db: PgPool,
}

impl PgUserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(map_insert_error)?;
        Ok(user)
    }
}

/// Translate store-level rejections of the insert into error kinds.
///
/// The unique index on email surfaces as a unique violation; absent or empty
/// required columns surface as not-null/check violations. Anything else is
/// passed through unchanged.
fn map_insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        match db_err.kind() {
            ErrorKind::UniqueViolation => return AppError::conflict("User already exists"),
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                return AppError::bad_request("Some fields are empty")
            }
            _ => {}
        }
    }
    AppError::Database(e)
}
