//! # Kredenco
//!
//! `kredenco` is a minimal credential-management service: it registers users,
//! enforces username uniqueness, stores salted bcrypt hashes, and verifies
//! credentials on login.
//!
//! Uniqueness is never enforced with in-process locking. Registration issues a
//! single conditional insert and branches on its result, so concurrent
//! registrations for the same username resolve inside the store.

pub mod cli;
pub mod kredenco;
pub mod store;
