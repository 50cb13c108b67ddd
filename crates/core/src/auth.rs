//! Credential verification for the login gate.
//!
//! The API exposes a single session-less login check. The trait keeps the
//! checking strategy pluggable; the only shipped implementation compares
//! against one statically configured pair.

use async_trait::async_trait;

use crate::error::CoreError;

/// Trait implemented by credential checking backends.
///
/// Implementations must be usable behind `Arc<dyn CredentialVerifier>` in
/// shared state, hence `Send + Sync`.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Check an email/password pair. `Ok(false)` means the pair is wrong;
    /// `Err` means the backend itself failed.
    async fn verify(&self, email: &str, password: &str) -> Result<bool, CoreError>;
}

/// Verifier backed by a single configured email/password pair.
///
/// Comparison is exact and case-sensitive, including the email.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    email: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentials {
    async fn verify(&self, email: &str, password: &str) -> Result<bool, CoreError> {
        Ok(self.email == email && self.password == password)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
