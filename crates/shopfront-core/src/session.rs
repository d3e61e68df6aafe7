//! # Session Store
//!
//! Holds the single authentication/role record.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   process start                                                         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ┌────────────┐  login(name, role)  ┌────────────────────────────┐     │
//! │  │ logged out │ ──────────────────► │ logged in                  │     │
//! │  │ (default)  │ ◄────────────────── │ { name, role, token }      │     │
//! │  └────────────┘       logout()      └────────────────────────────┘     │
//! │                                       │  login() again replaces the   │
//! │                                       └─ whole record, new token      │
//! │                                                                         │
//! │  Empty name → InvalidInput, record untouched.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logging out here only resets the record; emptying the cart is sequenced
//! by the [`Coordinator`](crate::coordinator::Coordinator).

use chrono::Utc;
use tracing::info;

use crate::error::StoreResult;
use crate::types::{Role, Session};
use crate::validation::validate_user_name;

/// Owner of the session record.
#[derive(Debug, Default)]
pub struct SessionStore {
    session: Session,
    tokens_issued: u64,
}

impl SessionStore {
    /// Creates a store in the logged-out state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs in, replacing the whole record.
    ///
    /// The stored name is trimmed. A fresh token is issued on every call,
    /// including a re-login while already logged in.
    pub fn login(&mut self, user_name: &str, role: Role) -> StoreResult<Session> {
        let user_name = validate_user_name(user_name)?;

        let token = self.issue_token();
        self.session = Session {
            logged_in: true,
            user_name: user_name.to_string(),
            role: Some(role),
            token: Some(token),
        };

        info!(user = %self.session.user_name, %role, "Session started");
        Ok(self.session.clone())
    }

    /// Resets to the logged-out record.
    pub fn logout(&mut self) -> Session {
        if self.session.logged_in {
            info!(user = %self.session.user_name, "Session ended");
        }
        self.session = Session::logged_out();
        self.session.clone()
    }

    /// Returns a snapshot of the current record.
    pub fn current_session(&self) -> Session {
        self.session.clone()
    }

    /// Borrowed view for the gate; avoids a clone per dispatch.
    pub(crate) fn session_ref(&self) -> &Session {
        &self.session
    }

    /// `token_<unix-millis>_<seq>`; the sequence keeps tokens unique when
    /// two logins land in the same millisecond.
    fn issue_token(&mut self) -> String {
        self.tokens_issued += 1;
        format!(
            "token_{}_{}",
            Utc::now().timestamp_millis(),
            self.tokens_issued
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn test_starts_logged_out() {
        let store = SessionStore::new();
        assert_eq!(store.current_session(), Session::logged_out());
    }

    #[test]
    fn test_login_replaces_record() {
        let mut store = SessionStore::new();
        let session = store.login("alice", Role::Admin).unwrap();

        assert!(session.logged_in);
        assert_eq!(session.user_name, "alice");
        assert_eq!(session.role, Some(Role::Admin));
        assert!(session.token.as_deref().unwrap().starts_with("token_"));
        assert_eq!(store.current_session(), session);
    }

    #[test]
    fn test_login_trims_name() {
        let mut store = SessionStore::new();
        let session = store.login("  bob ", Role::User).unwrap();
        assert_eq!(session.user_name, "bob");
    }

    #[test]
    fn test_empty_name_is_rejected_without_change() {
        let mut store = SessionStore::new();
        let err = store.login("   ", Role::Admin).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert_eq!(store.current_session(), Session::logged_out());

        // Also a no-op for an existing session
        let before = store.login("alice", Role::User).unwrap();
        assert!(store.login("", Role::Admin).is_err());
        assert_eq!(store.current_session(), before);
    }

    #[test]
    fn test_tokens_are_unique() {
        let mut store = SessionStore::new();
        let first = store.login("alice", Role::User).unwrap().token;
        let second = store.login("alice", Role::User).unwrap().token;
        assert_ne!(first, second);
    }

    #[test]
    fn test_logout_resets_to_default() {
        let mut store = SessionStore::new();
        store.login("alice", Role::Admin).unwrap();

        let session = store.logout();
        assert_eq!(session, Session::logged_out());
        assert_eq!(store.current_session(), Session::logged_out());

        // Logging out twice is harmless
        assert_eq!(store.logout(), Session::logged_out());
    }
}
