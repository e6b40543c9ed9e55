use async_trait::async_trait;

use auth::CredentialRecord;
use auth::CredentialStore;

use crate::domain::users::errors::UserError;

/// Persistence port for user credentials.
///
/// Extends the read-only [`CredentialStore`] the authentication core
/// consumes with the write side registration needs, so a single adapter
/// backs both.
#[async_trait]
pub trait UserRepository: CredentialStore {
    /// Persist a new credential record.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `StorageError` - Storage operation failed
    async fn create(&self, record: CredentialRecord) -> Result<CredentialRecord, UserError>;
}
