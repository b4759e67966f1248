//! Entity structs for all quizbank domain objects.
//!
//! Each entity maps to a table in the libSQL database (see `qb-db`).
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Relations are plain id fields; there are
//! no object back-references.

mod image;
mod progress;
mod question;
mod statistics;
mod tag;
mod user;

pub use image::{NewQuestionImage, QuestionImage};
pub use progress::UserProgress;
pub use question::{NewQuestion, Question, SOURCE_MAX_LEN, TOPIC_MAX_LEN};
pub use statistics::QuestionStatistics;
pub use tag::{QuestionTag, Tag};
pub use user::User;
