//! Schema setup.
//!
//! Embeds the SQL files at compile time and executes them on database open.
//! All statements use `IF NOT EXISTS` so re-running is a no-op.

use crate::QbDb;
use crate::error::DatabaseError;

/// Initial schema: 7 tables, 6 indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl QbDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        tracing::debug!("schema 001_initial applied");
        Ok(())
    }
}
