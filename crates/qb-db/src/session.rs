//! Scoped read sessions.

use qb_core::entities::Question;

use crate::Table;
use crate::error::DatabaseError;
use crate::repos::question::{QUESTION_COLUMNS, row_to_question};

/// A short-lived connection handed out by [`QbDb::session`](crate::QbDb::session).
///
/// Released when dropped or explicitly [`closed`](Session::close).
pub struct Session {
    conn: libsql::Connection,
}

impl Session {
    pub(crate) const fn new(conn: libsql::Connection) -> Self {
        Self { conn }
    }

    /// Count all rows of an entity's table.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count<T: Table>(&self) -> Result<i64, DatabaseError> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::NAME);
        let mut rows = self.conn.query(&sql, ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }

    /// Fetch one question in storage order, if any exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be parsed.
    pub async fn first_question(&self) -> Result<Option<Question>, DatabaseError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions LIMIT 1");
        let mut rows = self.conn.query(&sql, ()).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_question(&row)?)),
            None => Ok(None),
        }
    }

    /// Release the session.
    pub fn close(self) {
        tracing::debug!("session closed");
    }
}
