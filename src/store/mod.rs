//! Credential store adapter.
//!
//! The handlers never touch storage directly; everything goes through
//! [`CredentialStore`]. The store is the sole correctness mechanism for
//! username uniqueness: `try_create` is a single atomic conditional insert,
//! never a read-then-write.

pub mod memory;
pub mod postgres;

pub use self::memory::MemoryStore;
pub use self::postgres::PgStore;

use anyhow::Result;
use async_trait::async_trait;

/// The sole persisted entity: a username and its bcrypt hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
}

/// Result of a conditional insert. Storage faults are reported as errors,
/// not as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

/// Narrow interface both handlers share, held as a single long-lived
/// `Arc<dyn CredentialStore>` across concurrent requests.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert the record only if no record with its username exists.
    ///
    /// Must be atomic: concurrent callers with the same username get exactly
    /// one `Created`, the rest `AlreadyExists`.
    async fn try_create(&self, record: UserRecord) -> Result<CreateOutcome>;

    /// Point read by username. `None` means not found.
    async fn lookup(&self, username: &str) -> Result<Option<UserRecord>>;

    /// Connectivity probe consumed by the health endpoint.
    async fn ping(&self) -> Result<()>;
}
