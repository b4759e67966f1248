//! Per-question statistics repository.

use qb_core::entities::QuestionStatistics;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::QbService;

fn row_to_statistics(row: &libsql::Row) -> Result<QuestionStatistics, DatabaseError> {
    Ok(QuestionStatistics::from_counts(
        row.get::<i64>(0)?,
        row.get::<i64>(1)?,
        row.get::<i64>(2)?,
        row.get::<i64>(3)?,
        row.get::<f64>(4)?,
        parse_datetime(&row.get::<String>(5)?)?,
    )?)
}

impl QbService {
    /// Statistics for a question, or `None` if nothing has been recorded yet.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the stored counters are
    /// inconsistent.
    pub async fn get_statistics(
        &self,
        question_id: i64,
    ) -> Result<Option<QuestionStatistics>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT question_id, total_attempts, correct_attempts, timed_attempts,
                        average_time, last_updated
                 FROM question_statistics WHERE question_id = ?1",
                [question_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_statistics(&row)?)),
            None => Ok(None),
        }
    }

    /// Insert or replace the statistics row for `stats.question_id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` if the counters break
    /// `correct_attempts <= total_attempts`, or a libSQL error if the question
    /// does not exist.
    pub async fn save_statistics(&self, stats: &QuestionStatistics) -> Result<(), DatabaseError> {
        // Re-validate: the fields are public and may have been edited by hand.
        QuestionStatistics::from_counts(
            stats.question_id,
            stats.total_attempts,
            stats.correct_attempts,
            stats.timed_attempts,
            stats.average_time,
            stats.last_updated,
        )?;
        self.conn()
            .execute(
                "INSERT INTO question_statistics
                     (question_id, total_attempts, correct_attempts, timed_attempts,
                      average_time, last_updated)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(question_id) DO UPDATE SET
                     total_attempts = excluded.total_attempts,
                     correct_attempts = excluded.correct_attempts,
                     timed_attempts = excluded.timed_attempts,
                     average_time = excluded.average_time,
                     last_updated = excluded.last_updated",
                libsql::params![
                    stats.question_id,
                    stats.total_attempts,
                    stats.correct_attempts,
                    stats.timed_attempts,
                    stats.average_time,
                    stats.last_updated.to_rfc3339()
                ],
            )
            .await?;
        Ok(())
    }
}
