use super::api::ApiClient;
use super::session::{self, Session};
use crate::models::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(dead_code)]
    #[serde(default)]
    token_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Confirmation returned by registration. Registration does not log in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Exchanges credentials for a bearer token and persists the session.
/// Bad credentials surface as the one user-distinguishable auth message.
pub async fn login(username: &str, password: &str) -> Result<Session, AppError> {
    let client = ApiClient::new()?;
    let url = client.config().login_url();

    let response: TokenResponse = client
        .post(&url, &LoginRequest { username, password })
        .await
        .map_err(|e| match e {
            AppError::Auth(_) => AppError::Auth("Invalid username or password".to_string()),
            other => other,
        })?;

    if response.access_token.is_empty() {
        return Err(AppError::Data("Login returned an empty token".to_string()));
    }

    let session = Session::new(username, response.access_token);
    session::store(&session);
    Ok(session)
}

/// Creates an account. The caller stays anonymous until an explicit login.
pub async fn register(request: &RegisterRequest) -> Result<RegisteredUser, AppError> {
    let client = ApiClient::new()?;
    let url = client.config().register_url();
    client.post(&url, request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_parsing() {
        let json = r#"{"access_token": "abc123", "token_type": "bearer"}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "abc123");
    }

    #[test]
    fn test_registered_user_parsing() {
        let json = r#"{
            "id": "665f1c2b9a",
            "username": "rider",
            "email": "rider@example.com",
            "is_active": true,
            "created_at": "2026-08-20T10:00:00Z"
        }"#;

        let user: RegisteredUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "rider");
        assert!(user.is_active);
    }
}
