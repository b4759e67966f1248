//! Database health check.

use qb_core::entities::Question;
use qb_db::QbDb;
use qb_db::Session;
use qb_db::error::DatabaseError;

/// What a successful check saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSummary {
    pub total_questions: i64,
    pub sample_question: Option<String>,
}

/// Count questions and log one sample.
///
/// Errors are logged and swallowed; `None` means the check failed. The
/// session is released on every path.
pub async fn check_database(db: &QbDb) -> Option<DatabaseSummary> {
    let session = match db.session().await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Error checking database: {e}");
            return None;
        }
    };

    let result = inspect(&session).await;
    session.close();

    match result {
        Ok(summary) => Some(summary),
        Err(e) => {
            tracing::error!("Error checking database: {e}");
            None
        }
    }
}

async fn inspect(session: &Session) -> Result<DatabaseSummary, DatabaseError> {
    let total_questions = session.count::<Question>().await?;
    tracing::info!("Total questions in database: {total_questions}");

    let sample_question = session.first_question().await?.map(|q| q.question_text);
    match &sample_question {
        Some(text) => tracing::info!("Sample question: {text}"),
        None => tracing::info!("No questions found in database"),
    }

    Ok(DatabaseSummary {
        total_questions,
        sample_question,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qb_auth::{HashConfig, PasswordHasher};
    use qb_core::entities::NewQuestion;
    use qb_core::enums::{AnswerOption, ExamStage, ExamType, Subject};
    use qb_db::QbService;

    async fn service() -> QbService {
        let hasher = PasswordHasher::new(HashConfig { cost: 4 }).unwrap();
        QbService::new_local(":memory:", hasher).await.unwrap()
    }

    #[tokio::test]
    async fn empty_database() {
        let svc = service().await;
        let summary = check_database(svc.db()).await.unwrap();
        assert_eq!(
            summary,
            DatabaseSummary {
                total_questions: 0,
                sample_question: None,
            }
        );
    }

    #[tokio::test]
    async fn reports_count_and_sample() {
        let svc = service().await;
        for text in ["2+2?", "3+3?"] {
            let q = NewQuestion::new(
                text,
                ["1", "4", "6", "9"],
                AnswerOption::B,
                2020,
                ExamType::Ssc,
                ExamStage::Cbt1,
                Subject::Arithmetic,
            );
            svc.create_question(&q).await.unwrap();
        }

        let summary = check_database(svc.db()).await.unwrap();
        assert_eq!(summary.total_questions, 2);
        assert!(summary.sample_question.is_some());
    }

    #[tokio::test]
    async fn storage_errors_are_swallowed() {
        let svc = service().await;
        svc.db()
            .conn()
            .execute_batch(
                "DROP TABLE question_tags; DROP TABLE question_images;
                 DROP TABLE user_progress; DROP TABLE question_statistics;
                 DROP TABLE questions;",
            )
            .await
            .unwrap();

        assert!(check_database(svc.db()).await.is_none());
    }
}
