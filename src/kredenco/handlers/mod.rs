pub mod health;
pub use self::health::health;

pub mod user_register;
pub use self::user_register::register;

pub mod user_login;
pub use self::user_login::login;

// common types and functions for the handlers
use secrecy::SecretString;
use serde::Deserialize;
use utoipa::ToSchema;

/// Request body shared by registration and login. The password is wrapped in
/// a secret so debug output and traces never reveal it.
#[derive(ToSchema, Deserialize, Debug)]
pub struct Credentials {
    pub(crate) username: String,
    #[schema(value_type = String, format = Password)]
    pub(crate) password: SecretString,
}

pub fn valid_field(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::store::{CreateOutcome, CredentialStore, MemoryStore, UserRecord};
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store that fails every call, for exercising the StorageError paths.
    pub struct FailingStore;

    #[async_trait]
    impl CredentialStore for FailingStore {
        async fn try_create(&self, _record: UserRecord) -> Result<CreateOutcome> {
            Err(anyhow!("connection refused"))
        }

        async fn lookup(&self, _username: &str) -> Result<Option<UserRecord>> {
            Err(anyhow!("connection refused"))
        }

        async fn ping(&self) -> Result<()> {
            Err(anyhow!("connection refused"))
        }
    }

    /// Store whose first `try_create` fails without persisting, then recovers.
    /// Models a transient storage fault followed by a caller retry.
    pub struct FlakyStore {
        pub inner: MemoryStore,
        failures_left: AtomicUsize,
    }

    impl FlakyStore {
        pub fn failing_once() -> Self {
            Self {
                inner: MemoryStore::new(),
                failures_left: AtomicUsize::new(1),
            }
        }
    }

    #[async_trait]
    impl CredentialStore for FlakyStore {
        async fn try_create(&self, record: UserRecord) -> Result<CreateOutcome> {
            if self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| {
                    left.checked_sub(1)
                })
                .is_ok()
            {
                return Err(anyhow!("transient storage failure"));
            }

            self.inner.try_create(record).await
        }

        async fn lookup(&self, username: &str) -> Result<Option<UserRecord>> {
            self.inner.lookup(username).await
        }

        async fn ping(&self) -> Result<()> {
            self.inner.ping().await
        }
    }

    /// Store that counts calls, for asserting invalid input never reaches it.
    pub struct CountingStore {
        pub inner: MemoryStore,
        pub calls: AtomicUsize,
    }

    impl CountingStore {
        pub fn new() -> Self {
            Self {
                inner: MemoryStore::new(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CredentialStore for CountingStore {
        async fn try_create(&self, record: UserRecord) -> Result<CreateOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.try_create(record).await
        }

        async fn lookup(&self, username: &str) -> Result<Option<UserRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.lookup(username).await
        }

        async fn ping(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.ping().await
        }
    }
}
