//! Session context holding the bearer token for authenticated calls.

use std::sync::Mutex;

use crate::errors::{Error, Result};

/// Holds at most one bearer token at a time.
///
/// The context is passed explicitly (`Arc<SessionContext>`) into every
/// repository that issues authenticated requests; there is no process-wide
/// global. Writes only happen from the auth repository; reads are safe from
/// any task.
#[derive(Debug, Default)]
pub struct SessionContext {
    token: Mutex<Option<String>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite any existing token. Login is authoritative, not additive.
    pub fn set_token(&self, token: impl Into<String>) {
        let mut guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.into());
    }

    /// Remove the token. Subsequent authenticated calls fail with
    /// [`Error::Unauthenticated`] instead of going out without a header.
    pub fn clear_token(&self) {
        let mut guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    pub fn current_token(&self) -> Option<String> {
        let guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }

    /// The current token, or [`Error::Unauthenticated`] without touching the
    /// network.
    pub fn require_token(&self) -> Result<String> {
        self.current_token().ok_or(Error::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_overwrites_previous_token() {
        let session = SessionContext::new();
        session.set_token("first");
        session.set_token("second");
        assert_eq!(session.current_token().as_deref(), Some("second"));
    }

    #[test]
    fn cleared_token_fails_fast() {
        let session = SessionContext::new();
        session.set_token("abc");
        session.clear_token();
        assert!(session.current_token().is_none());
        assert!(matches!(session.require_token(), Err(Error::Unauthenticated)));
    }
}
