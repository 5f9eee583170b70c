use yew::prelude::*;

use crate::services::session::{self, Session};

/// Handle returned by `use_session` hook
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    /// Snapshot of the current session; valid at read time only.
    pub session: Option<Session>,
    pub set_session: Callback<Session>,
    pub logout: Callback<()>,
}

impl SessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }
}

/// Custom hook owning the process-wide session with localStorage
/// persistence. Restore on startup trusts the persisted token; an
/// unresolved identity is logged out by `session::load`.
#[hook]
pub fn use_session() -> SessionHandle {
    let session = use_state(session::load);

    // Login succeeded elsewhere: adopt and persist the new session.
    // Concurrent logins are last-write-wins.
    let set_session = {
        let session = session.clone();
        Callback::from(move |new_session: Session| {
            session::store(&new_session);
            session.set(Some(new_session));
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |()| {
            session::clear();
            session.set(None);
        })
    };

    SessionHandle {
        session: (*session).clone(),
        set_session,
        logout,
    }
}
