//! Shared test utilities for qb-db unit tests.

use qb_auth::{HashConfig, PasswordHasher};
use qb_core::entities::{NewQuestion, Question, User};
use qb_core::enums::{AnswerOption, ExamStage, ExamType, Subject};

use crate::QbDb;
use crate::service::QbService;

/// bcrypt's minimum cost keeps hashing fast in tests.
pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(HashConfig { cost: 4 }).unwrap()
}

/// Create an in-memory `QbService`.
pub async fn test_service() -> QbService {
    let db = QbDb::open_local(":memory:").await.unwrap();
    QbService::from_db(db, test_hasher())
}

pub fn arithmetic_question() -> NewQuestion {
    NewQuestion::new(
        "2+2?",
        ["3", "4", "5", "6"],
        AnswerOption::B,
        2020,
        ExamType::Ssc,
        ExamStage::Cbt1,
        Subject::Arithmetic,
    )
}

/// Insert a question and return it.
pub async fn seed_question(svc: &QbService) -> Question {
    svc.create_question(&arithmetic_question()).await.unwrap()
}

/// Register a user with a fixed password and return it.
pub async fn seed_user(svc: &QbService, username: &str) -> User {
    svc.register_user(&format!("{username}@example.com"), username, "s3cret-pw")
        .await
        .unwrap()
}
