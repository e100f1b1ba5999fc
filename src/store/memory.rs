//! In-memory credential store for local development and tests.
//!
//! The write lock makes the check-and-insert a single atomic step, matching
//! the conditional-insert semantics of the Postgres store.

use crate::store::{CreateOutcome, CredentialStore, UserRecord};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn try_create(&self, record: UserRecord) -> Result<CreateOutcome> {
        let mut users = self.users.write().await;

        match users.entry(record.username) {
            Entry::Occupied(_) => Ok(CreateOutcome::AlreadyExists),
            Entry::Vacant(entry) => {
                entry.insert(record.password_hash);
                Ok(CreateOutcome::Created)
            }
        }
    }

    async fn lookup(&self, username: &str) -> Result<Option<UserRecord>> {
        let users = self.users.read().await;

        Ok(users.get(username).map(|hash| UserRecord {
            username: username.to_string(),
            password_hash: hash.clone(),
        }))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
