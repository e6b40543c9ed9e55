use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use auth::CredentialRecord;
use auth::CredentialStore;
use auth::CredentialStoreError;

use crate::domain::users::errors::UserError;
use crate::domain::users::ports::UserRepository;

/// In-memory credential storage keyed by username.
///
/// Stands in for the relational user table; the map lock is held only for
/// the duration of a single read or insert, never across an await.
pub struct InMemoryUserRepository {
    records: RwLock<HashMap<String, CredentialRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryUserRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| CredentialStoreError::Lookup(e.to_string()))?;

        Ok(records.get(username).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, record: CredentialRecord) -> Result<CredentialRecord, UserError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| UserError::StorageError(e.to_string()))?;

        if records.contains_key(&record.username) {
            return Err(UserError::UsernameAlreadyExists(record.username));
        }

        records.insert(record.username.clone(), record.clone());
        Ok(record)
    }
}
