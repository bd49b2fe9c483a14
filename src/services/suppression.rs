use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use thiserror::Error;

use crate::core::ConsentHasher;

/// Errors that can occur when talking to the suppression store
#[derive(Debug, Error)]
pub enum SuppressionError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Narrow lookup interface over the suppression store.
///
/// The gate only ever reads; `record`/`remove` exist for the opt-out
/// endpoint, which writes records keyed by the same hash.
#[async_trait]
pub trait SuppressionStore: Send + Sync {
    /// True iff a record exists for the exact hash.
    async fn exists(&self, email_hash: &str) -> Result<bool, SuppressionError>;

    /// Insert a suppression record; inserting an existing hash is a no-op.
    async fn record(&self, email_hash: &str) -> Result<(), SuppressionError>;

    /// Remove a suppression record, returning whether one existed.
    async fn remove(&self, email_hash: &str) -> Result<bool, SuppressionError>;
}

/// Suppression record as stored; only the hash is kept, never the address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuppressionRecord {
    pub email_hash: String,
    pub opted_out_at: chrono::DateTime<chrono::Utc>,
}

/// PostgreSQL-backed suppression store.
///
/// Holds the opt-out list keyed by one-way email hash. The service computes
/// the hash; the raw address never reaches this table.
pub struct PostgresSuppressionStore {
    pool: PgPool,
}

impl PostgresSuppressionStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, SuppressionError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, SuppressionError> {
        tracing::info!("Connecting to suppression store");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, SuppressionError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

#[async_trait]
impl SuppressionStore for PostgresSuppressionStore {
    async fn exists(&self, email_hash: &str) -> Result<bool, SuppressionError> {
        let query = r#"
            SELECT 1 AS present
            FROM suppressed_contacts
            WHERE email_hash = $1
        "#;

        let row = sqlx::query(query)
            .bind(email_hash)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    async fn record(&self, email_hash: &str) -> Result<(), SuppressionError> {
        let query = r#"
            INSERT INTO suppressed_contacts (email_hash, opted_out_at)
            VALUES ($1, NOW())
            ON CONFLICT (email_hash) DO NOTHING
        "#;

        sqlx::query(query)
            .bind(email_hash)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Recorded suppression for hash {}", email_hash);

        Ok(())
    }

    async fn remove(&self, email_hash: &str) -> Result<bool, SuppressionError> {
        let query = r#"
            DELETE FROM suppressed_contacts
            WHERE email_hash = $1
        "#;

        let result = sqlx::query(query)
            .bind(email_hash)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// In-memory suppression store for tests and local development.
#[derive(Default)]
pub struct MemorySuppressionStore {
    hashes: RwLock<std::collections::HashSet<String>>,
}

impl MemorySuppressionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SuppressionStore for MemorySuppressionStore {
    async fn exists(&self, email_hash: &str) -> Result<bool, SuppressionError> {
        let hashes = self
            .hashes
            .read()
            .map_err(|e| SuppressionError::Unavailable(e.to_string()))?;
        Ok(hashes.contains(email_hash))
    }

    async fn record(&self, email_hash: &str) -> Result<(), SuppressionError> {
        let mut hashes = self
            .hashes
            .write()
            .map_err(|e| SuppressionError::Unavailable(e.to_string()))?;
        hashes.insert(email_hash.to_string());
        Ok(())
    }

    async fn remove(&self, email_hash: &str) -> Result<bool, SuppressionError> {
        let mut hashes = self
            .hashes
            .write()
            .map_err(|e| SuppressionError::Unavailable(e.to_string()))?;
        Ok(hashes.remove(email_hash))
    }
}

/// Consent gate: exactly one store lookup per call, no caching, no retry.
///
/// A failed lookup is surfaced as an error rather than collapsed into
/// "not suppressed"; the caller picks the safe default.
pub struct SuppressionGate {
    hasher: ConsentHasher,
    store: Arc<dyn SuppressionStore>,
}

impl SuppressionGate {
    pub fn new(hasher: ConsentHasher, store: Arc<dyn SuppressionStore>) -> Self {
        Self { hasher, store }
    }

    /// Compute the suppression key for an email address.
    pub fn hash_email(&self, email: &str) -> String {
        self.hasher.hash_email(email)
    }

    /// Membership check by exact hash.
    pub async fn is_suppressed(&self, email_hash: &str) -> Result<bool, SuppressionError> {
        self.store.exists(email_hash).await
    }
}
