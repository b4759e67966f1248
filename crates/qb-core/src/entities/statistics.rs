use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Per-question attempt counters. One row per question.
///
/// `correct_attempts <= total_attempts` always holds for values built through
/// [`QuestionStatistics::new`], [`QuestionStatistics::from_counts`] and
/// [`QuestionStatistics::record_attempt`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QuestionStatistics {
    pub question_id: i64,
    pub total_attempts: i64,
    pub correct_attempts: i64,
    /// Attempts that reported an answer time; the divisor of `average_time`.
    pub timed_attempts: i64,
    /// Running mean of reported answer times, in seconds.
    pub average_time: f64,
    pub last_updated: DateTime<Utc>,
}

impl QuestionStatistics {
    #[must_use]
    pub fn new(question_id: i64) -> Self {
        Self {
            question_id,
            total_attempts: 0,
            correct_attempts: 0,
            timed_attempts: 0,
            average_time: 0.0,
            last_updated: Utc::now(),
        }
    }

    /// Rebuild counters read from storage.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if a counter is negative, or if
    /// `correct_attempts` or `timed_attempts` exceeds `total_attempts`.
    pub fn from_counts(
        question_id: i64,
        total_attempts: i64,
        correct_attempts: i64,
        timed_attempts: i64,
        average_time: f64,
        last_updated: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        if total_attempts < 0 || correct_attempts < 0 || timed_attempts < 0 {
            return Err(CoreError::Validation(format!(
                "attempt counters cannot be negative \
                 (total {total_attempts}, correct {correct_attempts}, timed {timed_attempts})"
            )));
        }
        if correct_attempts > total_attempts {
            return Err(CoreError::Validation(format!(
                "correct_attempts ({correct_attempts}) exceeds total_attempts ({total_attempts})"
            )));
        }
        if timed_attempts > total_attempts {
            return Err(CoreError::Validation(format!(
                "timed_attempts ({timed_attempts}) exceeds total_attempts ({total_attempts})"
            )));
        }
        Ok(Self {
            question_id,
            total_attempts,
            correct_attempts,
            timed_attempts,
            average_time,
            last_updated,
        })
    }

    /// Fold one attempt into the counters.
    ///
    /// Attempts without a time count towards the totals but leave
    /// `average_time` alone; a timed attempt moves it by
    /// `(t - avg) / timed_attempts`.
    pub fn record_attempt(&mut self, is_correct: bool, time_taken: Option<f64>) {
        self.total_attempts += 1;
        if is_correct {
            self.correct_attempts += 1;
        }
        if let Some(t) = time_taken.filter(|t| t.is_finite() && *t >= 0.0) {
            self.timed_attempts += 1;
            #[allow(clippy::cast_precision_loss)]
            let n = self.timed_attempts as f64;
            self.average_time += (t - self.average_time) / n;
        }
        self.last_updated = Utc::now();
    }

    /// Fraction of attempts answered correctly, `0.0` with no attempts.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> f64 {
        if self.total_attempts == 0 {
            return 0.0;
        }
        self.correct_attempts as f64 / self.total_attempts as f64
    }
}
