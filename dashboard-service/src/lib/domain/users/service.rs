use std::sync::Arc;

use auth::CredentialRecord;
use auth::PasswordHasher;

use crate::domain::users::errors::UserError;
use crate::domain::users::models::RegisterUserCommand;
use crate::domain::users::ports::UserRepository;

/// Registration service: hashes the password and stores the credential
/// record. The plaintext never leaves this function and is never logged.
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: Arc<R>, password_hasher: PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    /// Register a new user with a fixed authority assignment.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Hashing failed
    /// * `StorageError` - Storage operation failed
    pub async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> Result<CredentialRecord, UserError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let record = CredentialRecord {
            username: command.username,
            password_hash,
            authorities: command.authorities,
        };

        let created = self.repository.create(record).await?;
        tracing::info!(username = %created.username, "User registered");
        Ok(created)
    }
}
