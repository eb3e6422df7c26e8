use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{instrument, warn};

use crate::{
    error::AppError,
    state::AppState,
    users::dto::{CreateUserRequest, PublicUser},
};

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(mut payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<PublicUser>), AppError> {
    payload.email = payload.email.trim().to_lowercase();

    // The store cannot see the plaintext password, so its emptiness is
    // checked here; name and email are also guarded by the table constraints.
    if payload.name.trim().is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        warn!("empty required field");
        return Err(AppError::bad_request("Some fields are empty"));
    }

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AppError::bad_request("Invalid email"));
    }

    let user = state.users.create(payload).await?;
    Ok((StatusCode::CREATED, Json(PublicUser::from(user))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("user@gmail.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@gmail"));
        assert!(!is_valid_email("user name@gmail.com"));
    }

    #[test]
    fn public_user_serialization() {
        let response = PublicUser {
            id: uuid::Uuid::new_v4(),
            name: "user".to_string(),
            email: "user@gmail.com".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("user@gmail.com"));
        assert!(json.contains("id"));
        assert!(!json.contains("password"));
    }
}
