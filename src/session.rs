//! Session store and token persistence.
//!
//! DESIGN
//! ======
//! [`Session`] is the signed-in flag the route guard reads. It starts signed
//! out and changes only through [`Session::sign_in`] and
//! [`Session::sign_out`]. The bearer token itself lives in a [`TokenStore`]:
//! a browser cookie in the web client, a file for the CLI, memory in tests.

use std::sync::Mutex;

use crate::error::ApiError;

/// Client-side record of whether the user is authenticated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    signed_in: bool,
}

impl Session {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    pub fn sign_in(&mut self) {
        self.signed_in = true;
    }

    pub fn sign_out(&mut self) {
        self.signed_in = false;
    }
}

/// Persistent home of the bearer token.
pub trait TokenStore: Send + Sync {
    /// The stored token, if any. Empty values count as absent.
    fn token(&self) -> Option<String>;

    /// Replace the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backing store rejects the write.
    fn store(&self, token: &str) -> Result<(), ApiError>;

    /// Forget the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backing store rejects the write.
    fn clear(&self) -> Result<(), ApiError>;
}

/// Bearer token for an authenticated request.
///
/// # Errors
///
/// Returns [`ApiError::MissingToken`] when nothing is stored.
pub fn bearer(tokens: &dyn TokenStore) -> Result<String, ApiError> {
    tokens
        .token()
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {token}"))
        .ok_or(ApiError::MissingToken)
}

/// In-process token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, ApiError> {
        self.token.lock().map_err(|_| ApiError::Storage("token mutex poisoned".into()))
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.slot().ok()?.clone().filter(|token| !token.is_empty())
    }

    fn store(&self, token: &str) -> Result<(), ApiError> {
        *self.slot()? = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        *self.slot()? = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
