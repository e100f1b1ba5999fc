//! Postgres-backed credential store.
//!
//! `try_create` is a plain `INSERT`; the `users` primary key turns a
//! duplicate username into SQLSTATE 23505, which is mapped to
//! [`CreateOutcome::AlreadyExists`]. The schema ships as `sql/schema.sql`
//! and is applied externally.

use crate::store::{CreateOutcome, CredentialStore, UserRecord};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Connection, PgPool, Row};
use std::time::Duration;
use tracing::{info_span, instrument, Instrument};

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database and wrap the pool.
    /// # Errors
    /// Returns an error if the connection cannot be established
    pub async fn connect(dsn: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .min_connections(1)
            .max_connections(5)
            .max_lifetime(Duration::from_secs(60 * 2))
            .test_before_acquire(true)
            .connect(dsn)
            .await
            .context("Failed to connect to database")?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    #[instrument(skip(self, record), fields(username = %record.username))]
    async fn try_create(&self, record: UserRecord) -> Result<CreateOutcome> {
        let query = "INSERT INTO users (username, password_hash) VALUES ($1, $2)";
        let span = info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = query
        );

        match sqlx::query(query)
            .bind(&record.username)
            .bind(&record.password_hash)
            .execute(&self.pool)
            .instrument(span)
            .await
        {
            Ok(_) => Ok(CreateOutcome::Created),
            Err(err) if is_unique_violation(&err) => Ok(CreateOutcome::AlreadyExists),
            Err(err) => Err(err).context("failed to insert user"),
        }
    }

    #[instrument(skip(self))]
    async fn lookup(&self, username: &str) -> Result<Option<UserRecord>> {
        let query = "SELECT username, password_hash FROM users WHERE username = $1";
        let span = info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        );

        let row = sqlx::query(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await
            .context("failed to fetch user")?;

        Ok(row.map(|row| UserRecord {
            username: row.get("username"),
            password_hash: row.get("password_hash"),
        }))
    }

    async fn ping(&self) -> Result<()> {
        let span = info_span!(
            "db.acquire",
            db.system = "postgresql",
            db.operation = "ACQUIRE"
        );

        async {
            let mut connection = self.pool.acquire().await?;
            connection.ping().await?;
            Ok::<(), sqlx::Error>(())
        }
        .instrument(span)
        .await
        .context("database ping failed")
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}
