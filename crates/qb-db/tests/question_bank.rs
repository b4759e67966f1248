//! Question bank integration tests
//!
//! Exercises a file-backed database end to end:
//! - Question insert visible through a fresh session
//! - Users, progress and statistics against the same questions
//! - Filtered listing and updates

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use qb_auth::{HashConfig, PasswordHasher};
use qb_core::entities::{NewQuestion, Question, QuestionStatistics, User};
use qb_core::enums::{AnswerOption, DifficultyLevel, ExamStage, ExamType, Subject};
use qb_db::repos::QuestionFilter;
use qb_db::service::QbService;
use qb_db::updates::question::QuestionUpdateBuilder;

async fn file_service(dir: &TempDir) -> QbService {
    let path = dir.path().join("quizbank.db");
    let hasher = PasswordHasher::new(HashConfig { cost: 4 }).unwrap();
    QbService::new_local(path.to_str().unwrap(), hasher)
        .await
        .unwrap()
}

fn two_plus_two() -> NewQuestion {
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

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inserted_question_is_counted_and_read_back() {
    let dir = TempDir::new().unwrap();
    let svc = file_service(&dir).await;

    let session = svc.db().session().await.unwrap();
    let before = session.count::<Question>().await.unwrap();
    session.close();

    let created = svc.create_question(&two_plus_two()).await.unwrap();

    let session = svc.db().session().await.unwrap();
    assert_eq!(session.count::<Question>().await.unwrap(), before + 1);
    let sample = session.first_question().await.unwrap().unwrap();
    session.close();

    assert_eq!(sample, created);
    assert_eq!(sample.question_text, "2+2?");
    assert_eq!(sample.options(), ["3", "4", "5", "6"]);
    assert_eq!(sample.correct_answer, AnswerOption::B);
    assert_eq!(sample.correct_option_text(), "4");
    assert_eq!(sample.difficulty_level, DifficultyLevel::Moderate);
    assert!(!sample.has_diagram);
}

#[tokio::test]
async fn data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let id = {
        let svc = file_service(&dir).await;
        svc.create_question(&two_plus_two()).await.unwrap().id
    };

    let svc = file_service(&dir).await;
    let stored = svc.get_question(id).await.unwrap();
    assert_eq!(stored.question_text, "2+2?");
    assert_eq!(svc.count_questions().await.unwrap(), 1);
}

#[tokio::test]
async fn filter_and_update() {
    let dir = TempDir::new().unwrap();
    let svc = file_service(&dir).await;

    let arithmetic = svc.create_question(&two_plus_two()).await.unwrap();
    let mut reasoning = two_plus_two();
    reasoning.question_text = "Odd one out?".into();
    reasoning.subject = Subject::Reasoning;
    reasoning.exam_type = ExamType::Ntpc;
    svc.create_question(&reasoning).await.unwrap();

    let filter = QuestionFilter {
        subject: Some(Subject::Arithmetic),
        ..QuestionFilter::default()
    };
    let found = svc.list_questions(&filter, 10).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, arithmetic.id);

    let update = QuestionUpdateBuilder::new()
        .question_text("What is 2+2?")
        .explanation(Some("Basic addition".into()))
        .build();
    let updated = svc.update_question(arithmetic.id, update).await.unwrap();
    assert_eq!(updated.question_text, "What is 2+2?");
    assert_eq!(updated.explanation.as_deref(), Some("Basic addition"));
    assert!(updated.updated_at >= arithmetic.updated_at);
}

// ---------------------------------------------------------------------------
// Users, progress, statistics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn attempts_flow_into_progress_and_statistics() {
    let dir = TempDir::new().unwrap();
    let svc = file_service(&dir).await;

    let question = svc.create_question(&two_plus_two()).await.unwrap();
    let user = svc
        .register_user("asha@example.com", "asha", "railway-exam")
        .await
        .unwrap();

    let session = svc.db().session().await.unwrap();
    assert_eq!(session.count::<User>().await.unwrap(), 1);
    session.close();

    let mut stats = QuestionStatistics::new(question.id);
    for (answer, time) in [(AnswerOption::B, 12.0), (AnswerOption::A, 20.0)] {
        let is_correct = question.is_correct(answer);
        svc.record_progress(user.id, question.id, is_correct, Some(time))
            .await
            .unwrap();
        stats.record_attempt(is_correct, Some(time));
    }
    svc.save_statistics(&stats).await.unwrap();

    let progress = svc.progress_for_user(user.id, 10).await.unwrap();
    assert_eq!(progress.len(), 2);
    assert_eq!(progress.iter().filter(|p| p.is_correct).count(), 1);

    let stored = svc.get_statistics(question.id).await.unwrap().unwrap();
    assert_eq!(stored.total_attempts, 2);
    assert_eq!(stored.correct_attempts, 1);
    assert!((stored.average_time - 16.0).abs() < f64::EPSILON);

    let fetched = svc.get_user_by_username("asha").await.unwrap();
    assert!(fetched.verify_password(svc.hasher(), "railway-exam"));
    assert!(!fetched.verify_password(svc.hasher(), "wrong-guess"));
}
