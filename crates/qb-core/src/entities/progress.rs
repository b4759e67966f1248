use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One answer attempt. Append-only: rows are never updated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct UserProgress {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,
    /// Stored as `0`/`1`.
    pub is_correct: bool,
    /// Seconds spent answering.
    pub time_taken: Option<f64>,
    pub attempted_at: DateTime<Utc>,
}

impl UserProgress {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for negative or non-finite durations.
    pub fn validate_time_taken(time_taken: Option<f64>) -> Result<(), CoreError> {
        match time_taken {
            Some(t) if !t.is_finite() || t < 0.0 => Err(CoreError::Validation(format!(
                "time_taken must be a non-negative number of seconds, got {t}"
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(0.0))]
    #[case(Some(42.5))]
    fn accepted_durations(#[case] t: Option<f64>) {
        assert!(UserProgress::validate_time_taken(t).is_ok());
    }

    #[rstest]
    #[case(Some(-0.5))]
    #[case(Some(f64::NAN))]
    #[case(Some(f64::INFINITY))]
    fn rejected_durations(#[case] t: Option<f64>) {
        assert!(UserProgress::validate_time_taken(t).is_err());
    }
}
