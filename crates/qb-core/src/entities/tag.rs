use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::validation::{check_max_len, check_not_blank};

pub const TAG_NAME_MAX_LEN: usize = 50;

/// A free-form label shared across questions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for blank names or names over 50 characters.
    pub fn validate_name(name: &str) -> Result<(), CoreError> {
        check_not_blank("tag name", name)?;
        check_max_len("tag name", name, TAG_NAME_MAX_LEN)
    }
}

/// Edge between a question and a tag. Identified by the pair; owned by neither side.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionTag {
    pub question_id: i64,
    pub tag_id: i64,
    pub created_at: DateTime<Utc>,
}
