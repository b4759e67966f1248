//! Repository modules implementing CRUD operations for all quizbank entities.
//!
//! Each module adds methods to `QbService` via `impl QbService` blocks.

pub mod image;
pub mod progress;
pub mod question;
pub mod statistics;
pub mod tag;
pub mod user;

pub use question::QuestionFilter;
