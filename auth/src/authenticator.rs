use std::sync::Arc;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::principal::CredentialStore;
use crate::principal::CredentialStoreError;
use crate::principal::Principal;

/// Authentication failure.
///
/// `InvalidCredentials` deliberately covers both unknown usernames and wrong
/// passwords — callers must not be able to tell the two apart, which keeps
/// username enumeration off the table. The remaining variants are internal
/// faults, not client mistakes.
#[derive(Debug, thiserror::Error)]
pub enum AuthFailure {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Credential store error: {0}")]
    Store(#[from] CredentialStoreError),
}

/// Verifies login attempts against the credential store.
///
/// Combines the store lookup with password verification and produces the
/// principal a successful attempt authenticates as. Pure read path: no
/// retries, no writes, no shared mutable state.
pub struct Authenticator<S: CredentialStore> {
    store: Arc<S>,
    password_hasher: PasswordHasher,
}

impl<S: CredentialStore> Authenticator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
        }
    }

    /// Verify a username/password pair.
    ///
    /// # Returns
    /// The principal carrying the authorities stored for this user
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user or wrong password
    /// * `Password` - Stored hash was unusable
    /// * `Store` - Credential lookup failed
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Principal, AuthFailure> {
        let record = match self.store.find_by_username(username).await? {
            Some(record) => record,
            None => return Err(AuthFailure::InvalidCredentials),
        };

        if !self.password_hasher.verify(password, &record.password_hash)? {
            return Err(AuthFailure::InvalidCredentials);
        }

        Ok(Principal::new(record.username, record.authorities))
    }
}
