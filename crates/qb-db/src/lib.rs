//! # qb-db
//!
//! libSQL persistence for the quizbank question bank.
//!
//! Holds all relational state: users, questions, tags and their links,
//! question images, the answer log and per-question statistics.
//! [`QbDb`] is the session factory; [`QbService`](service::QbService) hosts the
//! repository methods.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod session;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use qb_core::entities::{
    Question, QuestionImage, QuestionStatistics, QuestionTag, Tag, User, UserProgress,
};

pub use service::QbService;
pub use session::Session;

/// Maps an entity to the table that stores it.
pub trait Table {
    const NAME: &'static str;
}

impl Table for User {
    const NAME: &'static str = "users";
}
impl Table for Question {
    const NAME: &'static str = "questions";
}
impl Table for Tag {
    const NAME: &'static str = "tags";
}
impl Table for QuestionTag {
    const NAME: &'static str = "question_tags";
}
impl Table for UserProgress {
    const NAME: &'static str = "user_progress";
}
impl Table for QuestionStatistics {
    const NAME: &'static str = "question_statistics";
}
impl Table for QuestionImage {
    const NAME: &'static str = "question_images";
}

/// Central database handle.
///
/// Wraps a libSQL database and its primary connection, and hands out scoped
/// [`Session`]s.
pub struct QbDb {
    db: libsql::Database,
    conn: libsql::Connection,
    in_memory: bool,
}

impl QbDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        enable_foreign_keys(&conn).await?;

        let qb_db = Self {
            db,
            conn,
            in_memory: path == ":memory:",
        };
        qb_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(qb_db)
    }

    /// Access the primary libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Acquire a scoped session.
    ///
    /// File databases get a fresh connection. An in-memory database only
    /// exists on its own connection, so sessions share it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a connection cannot be opened.
    pub async fn session(&self) -> Result<Session, DatabaseError> {
        if self.in_memory {
            return Ok(Session::new(self.conn.clone()));
        }
        let conn = self.db.connect()?;
        enable_foreign_keys(&conn).await?;
        Ok(Session::new(conn))
    }
}

/// Foreign keys must be switched on per connection in `SQLite`.
async fn enable_foreign_keys(conn: &libsql::Connection) -> Result<(), DatabaseError> {
    conn.execute("PRAGMA foreign_keys = ON", ())
        .await
        .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;
    Ok(())
}
