//! Question update builder.

use qb_core::entities::{SOURCE_MAX_LEN, TOPIC_MAX_LEN};
use qb_core::enums::{AnswerOption, DifficultyLevel, ExamStage, ExamType, Subject};
use qb_core::errors::CoreError;
use qb_core::validation::{check_max_len, check_not_blank, empty_as_none};
use serde::Serialize;

/// Partial update of a question. `Option<Option<_>>` fields distinguish
/// "leave alone" (`None`) from "set to NULL" (`Some(None)`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuestionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<[String; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<AnswerOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_type: Option<ExamType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_stage: Option<ExamStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<DifficultyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Option<String>>,
}

impl QuestionUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.question_text.is_none()
            && self.options.is_none()
            && self.correct_answer.is_none()
            && self.explanation.is_none()
            && self.diagram.is_none()
            && self.year.is_none()
            && self.exam_type.is_none()
            && self.exam_stage.is_none()
            && self.subject.is_none()
            && self.topic.is_none()
            && self.difficulty_level.is_none()
            && self.source.is_none()
    }

    /// Turn `Some(Some(""))` into `Some(None)`, since storage reads `''` back as NULL.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.explanation = self.explanation.map(empty_as_none);
        self.diagram = self.diagram.map(empty_as_none);
        self.topic = self.topic.map(empty_as_none);
        self.source = self.source.map(empty_as_none);
        self
    }
}

pub struct QuestionUpdateBuilder(QuestionUpdate);

impl QuestionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(QuestionUpdate::default())
    }

    #[must_use]
    pub fn question_text(mut self, val: impl Into<String>) -> Self {
        self.0.question_text = Some(val.into());
        self
    }

    #[must_use]
    pub fn options(mut self, val: [&str; 4]) -> Self {
        self.0.options = Some(val.map(String::from));
        self
    }

    #[must_use]
    pub const fn correct_answer(mut self, val: AnswerOption) -> Self {
        self.0.correct_answer = Some(val);
        self
    }

    #[must_use]
    pub fn explanation(mut self, val: Option<String>) -> Self {
        self.0.explanation = Some(val);
        self
    }

    /// `Some(description)` marks the question as having a diagram; `None`
    /// clears both the flag and the description.
    #[must_use]
    pub fn diagram(mut self, description: Option<String>) -> Self {
        self.0.diagram = Some(description);
        self
    }

    #[must_use]
    pub const fn year(mut self, val: i32) -> Self {
        self.0.year = Some(val);
        self
    }

    #[must_use]
    pub const fn exam_type(mut self, val: ExamType) -> Self {
        self.0.exam_type = Some(val);
        self
    }

    #[must_use]
    pub const fn exam_stage(mut self, val: ExamStage) -> Self {
        self.0.exam_stage = Some(val);
        self
    }

    #[must_use]
    pub const fn subject(mut self, val: Subject) -> Self {
        self.0.subject = Some(val);
        self
    }

    #[must_use]
    pub fn topic(mut self, val: Option<String>) -> Self {
        self.0.topic = Some(val);
        self
    }

    #[must_use]
    pub const fn difficulty_level(mut self, val: DifficultyLevel) -> Self {
        self.0.difficulty_level = Some(val);
        self
    }

    #[must_use]
    pub fn source(mut self, val: Option<String>) -> Self {
        self.0.source = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> QuestionUpdate {
        self.0
    }
}

impl Default for QuestionUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the same blank/length rules as `NewQuestion::validate` to the
/// fields an update touches.
pub(crate) fn validate_update(update: &QuestionUpdate) -> Result<(), CoreError> {
    if let Some(text) = &update.question_text {
        check_not_blank("question_text", text)?;
    }
    if let Some(options) = &update.options {
        for (option, text) in AnswerOption::ALL.iter().zip(options) {
            check_not_blank(&format!("option_{}", option.as_str().to_lowercase()), text)?;
        }
    }
    if let Some(Some(topic)) = &update.topic {
        check_max_len("topic", topic, TOPIC_MAX_LEN)?;
    }
    if let Some(Some(source)) = &update.source {
        check_max_len("source", source, SOURCE_MAX_LEN)?;
    }
    Ok(())
}
