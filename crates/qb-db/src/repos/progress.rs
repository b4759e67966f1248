//! Answer log repository. Rows are appended, never updated.

use chrono::Utc;

use qb_core::entities::UserProgress;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, parse_datetime};
use crate::service::QbService;

fn row_to_progress(row: &libsql::Row) -> Result<UserProgress, DatabaseError> {
    Ok(UserProgress {
        id: row.get::<i64>(0)?,
        user_id: row.get::<i64>(1)?,
        question_id: row.get::<i64>(2)?,
        is_correct: get_bool(row, 3)?,
        time_taken: row.get::<Option<f64>>(4)?,
        attempted_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl QbService {
    /// Append one answer attempt.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` for a negative or non-finite
    /// `time_taken`, or a libSQL error if the user or question is unknown.
    pub async fn record_progress(
        &self,
        user_id: i64,
        question_id: i64,
        is_correct: bool,
        time_taken: Option<f64>,
    ) -> Result<UserProgress, DatabaseError> {
        UserProgress::validate_time_taken(time_taken)?;
        let now = Utc::now();
        self.conn()
            .execute(
                "INSERT INTO user_progress (user_id, question_id, is_correct, time_taken, attempted_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    user_id,
                    question_id,
                    i64::from(is_correct),
                    time_taken,
                    now.to_rfc3339()
                ],
            )
            .await?;
        Ok(UserProgress {
            id: self.conn().last_insert_rowid(),
            user_id,
            question_id,
            is_correct,
            time_taken,
            attempted_at: now,
        })
    }

    /// A user's most recent attempts first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn progress_for_user(
        &self,
        user_id: i64,
        limit: u32,
    ) -> Result<Vec<UserProgress>, DatabaseError> {
        let sql = format!(
            "SELECT id, user_id, question_id, is_correct, time_taken, attempted_at
             FROM user_progress WHERE user_id = ?1
             ORDER BY attempted_at DESC, id DESC LIMIT {limit}"
        );
        let mut rows = self.conn().query(&sql, [user_id]).await?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_progress(&row)?);
        }
        Ok(entries)
    }
}
