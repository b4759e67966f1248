use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AnswerOption, DifficultyLevel, ExamStage, ExamType, Subject};
use crate::errors::CoreError;
use crate::validation::{check_max_len, check_not_blank, empty_as_none};

pub const TOPIC_MAX_LEN: usize = 100;
pub const SOURCE_MAX_LEN: usize = 255;

/// A multiple-choice exam question with four options.
///
/// Root aggregate for its tag links and images.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: AnswerOption,
    pub explanation: Option<String>,
    pub has_diagram: bool,
    /// Accessible description of the diagram, when there is one.
    pub diagram_description: Option<String>,
    pub year: i32,
    pub exam_type: ExamType,
    pub exam_stage: ExamStage,
    pub subject: Subject,
    pub topic: Option<String>,
    pub difficulty_level: DifficultyLevel,
    /// Where the question came from, e.g. "Previous Year Paper".
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// The four option texts in A..D order.
    #[must_use]
    pub fn options(&self) -> [&str; 4] {
        [
            &self.option_a,
            &self.option_b,
            &self.option_c,
            &self.option_d,
        ]
    }

    #[must_use]
    pub fn correct_option_text(&self) -> &str {
        self.options()[self.correct_answer.index()]
    }

    #[must_use]
    pub fn is_correct(&self, answer: AnswerOption) -> bool {
        self.correct_answer == answer
    }
}

/// Insert payload for a question. Ids and timestamps are assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewQuestion {
    pub question_text: String,
    pub options: [String; 4],
    pub correct_answer: AnswerOption,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub has_diagram: bool,
    #[serde(default)]
    pub diagram_description: Option<String>,
    pub year: i32,
    pub exam_type: ExamType,
    pub exam_stage: ExamStage,
    pub subject: Subject,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub difficulty_level: DifficultyLevel,
    #[serde(default)]
    pub source: Option<String>,
}

impl NewQuestion {
    /// A question with only the required fields set.
    #[must_use]
    pub fn new(
        question_text: impl Into<String>,
        options: [&str; 4],
        correct_answer: AnswerOption,
        year: i32,
        exam_type: ExamType,
        exam_stage: ExamStage,
        subject: Subject,
    ) -> Self {
        Self {
            question_text: question_text.into(),
            options: options.map(String::from),
            correct_answer,
            explanation: None,
            has_diagram: false,
            diagram_description: None,
            year,
            exam_type,
            exam_stage,
            subject,
            topic: None,
            difficulty_level: DifficultyLevel::default(),
            source: None,
        }
    }

    /// Check text presence and column length limits.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_not_blank("question_text", &self.question_text)?;
        for (option, text) in AnswerOption::ALL.iter().zip(&self.options) {
            check_not_blank(&format!("option_{}", option.as_str().to_lowercase()), text)?;
        }
        if let Some(topic) = &self.topic {
            check_max_len("topic", topic, TOPIC_MAX_LEN)?;
        }
        if let Some(source) = &self.source {
            check_max_len("source", source, SOURCE_MAX_LEN)?;
        }
        Ok(())
    }

    /// Replace empty optional text with `None`, matching what storage returns.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.explanation = empty_as_none(self.explanation);
        self.diagram_description = empty_as_none(self.diagram_description);
        self.topic = empty_as_none(self.topic);
        self.source = empty_as_none(self.source);
        self
    }

    /// Materialize the stored question once the row id is known.
    #[must_use]
    pub fn into_question(self, id: i64, now: DateTime<Utc>) -> Question {
        let [option_a, option_b, option_c, option_d] = self.options;
        Question {
            id,
            question_text: self.question_text,
            option_a,
            option_b,
            option_c,
            option_d,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
            has_diagram: self.has_diagram,
            diagram_description: self.diagram_description,
            year: self.year,
            exam_type: self.exam_type,
            exam_stage: self.exam_stage,
            subject: self.subject,
            topic: self.topic,
            difficulty_level: self.difficulty_level,
            source: self.source,
            created_at: now,
            updated_at: now,
        }
    }
}
