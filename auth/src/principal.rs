use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Named permission grant attached to a principal.
///
/// Modeled as a closed set rather than open strings so policy evaluation
/// can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Authority {
    Admin,
    User,
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authority::Admin => f.write_str("ADMIN"),
            Authority::User => f.write_str("USER"),
        }
    }
}

/// Authenticated identity bound to a request.
///
/// Derived from a [`CredentialRecord`] at authentication time and never
/// persisted. Authorities always originate from the credential store, not
/// from anything the client sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub authorities: Vec<Authority>,
}

impl Principal {
    pub fn new(username: impl Into<String>, authorities: Vec<Authority>) -> Self {
        Self {
            username: username.into(),
            authorities,
        }
    }

    pub fn has_authority(&self, authority: Authority) -> bool {
        self.authorities.contains(&authority)
    }
}

/// Stored credential record, owned by the credential store.
///
/// The password hash is an opaque digest; plaintext never appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub username: String,
    pub password_hash: String,
    pub authorities: Vec<Authority>,
}

/// Error type for credential store lookups.
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    #[error("Credential lookup failed: {0}")]
    Lookup(String),
}

/// Lookup port over stored credentials.
///
/// The only operation the authentication core needs; persistence and user
/// management belong to the implementing adapter.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve the credential record for a username.
    ///
    /// # Returns
    /// `None` when no such user exists
    ///
    /// # Errors
    /// * `Lookup` - The store itself failed
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError>;
}
