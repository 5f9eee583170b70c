use crate::config::Config;
use gloo_storage::Storage;
use serde::{Deserialize, Serialize};

/// The authenticated session. Existence implies a non-empty token.
/// One writer (the session hook); readers treat a received value as a
/// snapshot valid only at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub token: String,
}

impl Session {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }
}

/// Reconstructs a session from its persisted parts. A token without a
/// resolved username is an unresolved identity and yields no session;
/// the caller is expected to clear storage in that case.
pub fn resolve(token: Option<String>, username: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.is_empty())?;
    let username = username.filter(|u| !u.is_empty())?;
    Some(Session { username, token })
}

/// Restores the persisted session on startup. The token is trusted
/// without backend revalidation; an unresolved identity logs out.
pub fn load() -> Option<Session> {
    let token = gloo_storage::LocalStorage::get(Config::TOKEN_STORAGE_KEY).ok();
    let username = gloo_storage::LocalStorage::get(Config::USERNAME_STORAGE_KEY).ok();

    match resolve(token, username) {
        Some(session) => Some(session),
        None => {
            clear();
            None
        }
    }
}

/// Persists the session so it survives a reload.
pub fn store(session: &Session) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::TOKEN_STORAGE_KEY, &session.token) {
        gloo::console::warn!(format!("Failed to persist token: {e:?}"));
    }
    if let Err(e) =
        gloo_storage::LocalStorage::set(Config::USERNAME_STORAGE_KEY, &session.username)
    {
        gloo::console::warn!(format!("Failed to persist username: {e:?}"));
    }
}

/// Clears the persisted session unconditionally. Idempotent.
pub fn clear() {
    gloo_storage::LocalStorage::delete(Config::TOKEN_STORAGE_KEY);
    gloo_storage::LocalStorage::delete(Config::USERNAME_STORAGE_KEY);
}

/// Returns the persisted bearer token, if a session is active.
pub fn stored_token() -> Option<String> {
    gloo_storage::LocalStorage::get::<String>(Config::TOKEN_STORAGE_KEY)
        .ok()
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_full_session() {
        let session = resolve(Some("abc123".to_string()), Some("rider".to_string()));
        assert_eq!(session, Some(Session::new("rider", "abc123")));
    }

    #[test]
    fn test_resolve_token_without_username() {
        assert_eq!(resolve(Some("abc123".to_string()), None), None);
        assert_eq!(
            resolve(Some("abc123".to_string()), Some(String::new())),
            None
        );
    }

    #[test]
    fn test_resolve_requires_nonempty_token() {
        assert_eq!(resolve(None, Some("rider".to_string())), None);
        assert_eq!(
            resolve(Some(String::new()), Some("rider".to_string())),
            None
        );
    }
}
