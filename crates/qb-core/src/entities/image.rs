use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::validation::{check_max_len, check_not_blank, empty_as_none};

pub const IMAGE_PATH_MAX_LEN: usize = 255;
pub const IMAGE_TYPE_MAX_LEN: usize = 50;

/// An image attached to a question. Several images on one question are shown
/// in `(display_order, id)` order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionImage {
    pub id: i64,
    pub question_id: i64,
    pub image_path: String,
    /// e.g. "diagram", "graph", "table".
    pub image_type: Option<String>,
    pub caption: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a question image.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewQuestionImage {
    pub question_id: i64,
    pub image_path: String,
    #[serde(default)]
    pub image_type: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

impl NewQuestionImage {
    #[must_use]
    pub fn new(question_id: i64, image_path: impl Into<String>) -> Self {
        Self {
            question_id,
            image_path: image_path.into(),
            image_type: None,
            caption: None,
            display_order: 0,
        }
    }

    /// Replace empty optional text with `None`, matching what storage returns.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.image_type = empty_as_none(self.image_type);
        self.caption = empty_as_none(self.caption);
        self
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank path or over-long columns.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_not_blank("image_path", &self.image_path)?;
        check_max_len("image_path", &self.image_path, IMAGE_PATH_MAX_LEN)?;
        if let Some(image_type) = &self.image_type {
            check_max_len("image_type", image_type, IMAGE_TYPE_MAX_LEN)?;
        }
        Ok(())
    }
}
