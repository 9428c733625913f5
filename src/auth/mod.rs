//! Token authentication for inventory tool access.
//!
//! Tool calls may run on behalf of a named user so that stock mutations can
//! be attributed in the audit trail. The [`TokenValidator`] maps opaque API
//! tokens to [`AuthenticatedUser`] identities; raw token values never appear
//! in logs, only their SHA-256 fingerprints.
//!
//! # Example Usage
//!
//! ```rust
//! use inventory_mcp::auth::{AuthenticatedUser, TokenValidator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = TokenValidator::new();
//! validator
//!     .register_token("inv-token-123", AuthenticatedUser::new("stockkeeper"))
//!     .await;
//!
//! let user = validator.authenticate("inv-token-123").await?;
//! assert_eq!(user.username, "stockkeeper");
//! # Ok(())
//! # }
//! ```

use log::{debug, warn};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Identity of the user or agent behind a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Username recorded against stock mutations
    pub username: String,
}

impl AuthenticatedUser {
    /// Create a user identity with the given username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid token provided")]
    InvalidToken,
    #[error("No token provided")]
    MissingToken,
}

/// Validates API tokens against a registered token store.
///
/// The store is shared behind an `Arc`, so clones of the validator observe
/// the same registrations.
#[derive(Debug, Clone)]
pub struct TokenValidator {
    tokens: Arc<RwLock<HashMap<String, AuthenticatedUser>>>,
}

impl TokenValidator {
    /// Create a validator with an empty token store.
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a token for a user.
    pub async fn register_token(&self, token: &str, user: AuthenticatedUser) {
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.to_string(), user);
    }

    /// Remove a token from the store.
    ///
    /// Returns the user the token belonged to, if it was registered.
    pub async fn revoke_token(&self, token: &str) -> Option<AuthenticatedUser> {
        let mut tokens = self.tokens.write().await;
        tokens.remove(token)
    }

    /// Resolve a token to the user it was registered for.
    ///
    /// Logs only the token's SHA-256 fingerprint, never the raw value.
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let fingerprint = token_fingerprint(token);
        let tokens = self.tokens.read().await;
        match tokens.get(token) {
            Some(user) => {
                debug!(
                    "Authenticated token {} as user '{}'",
                    fingerprint, user.username
                );
                Ok(user.clone())
            }
            None => {
                warn!("Rejected unknown token {}", fingerprint);
                Err(AuthError::InvalidToken)
            }
        }
    }
}

impl Default for TokenValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA-256 hex digest of a token, safe to write to logs.
fn token_fingerprint(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
