use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::AppResult;
use crate::users::dto::CreateUserRequest;
use crate::users::password::PasswordHasher;
use crate::users::repo::UserRepository;
use crate::users::repo_types::{NewUser, User};

/// Registration entry point.
///
/// Holds its collaborators behind trait objects so tests can substitute
/// stand-ins for the store and the hasher.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    /// Hash the plaintext password and persist the user.
    ///
    /// A hashing failure is fatal for the operation; the repository is not
    /// invoked. Repository errors are propagated unchanged.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateUserRequest) -> AppResult<User> {
        let password_hash = self.hasher.hash(&input.password)?;

        let user = self
            .repo
            .create(NewUser {
                name: input.name,
                email: input.email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "user created");
        Ok(user)
    }
}
