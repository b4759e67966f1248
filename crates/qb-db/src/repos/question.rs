//! Question repository: CRUD and filtered listing.

use chrono::Utc;

use qb_core::entities::{NewQuestion, Question};
use qb_core::enums::{DifficultyLevel, ExamStage, ExamType, Subject};

use crate::error::DatabaseError;
use crate::helpers::{get_bool, get_i32, get_opt_string, parse_datetime, parse_enum};
use crate::service::QbService;
use crate::updates::question::{QuestionUpdate, validate_update};

pub(crate) const QUESTION_COLUMNS: &str = "id, question_text, option_a, option_b, option_c, option_d, \
     correct_answer, explanation, has_diagram, diagram_description, year, exam_type, exam_stage, \
     subject, topic, difficulty_level, source, created_at, updated_at";

pub(crate) fn row_to_question(row: &libsql::Row) -> Result<Question, DatabaseError> {
    Ok(Question {
        id: row.get::<i64>(0)?,
        question_text: row.get::<String>(1)?,
        option_a: row.get::<String>(2)?,
        option_b: row.get::<String>(3)?,
        option_c: row.get::<String>(4)?,
        option_d: row.get::<String>(5)?,
        correct_answer: parse_enum(&row.get::<String>(6)?)?,
        explanation: get_opt_string(row, 7)?,
        has_diagram: get_bool(row, 8)?,
        diagram_description: get_opt_string(row, 9)?,
        year: get_i32(row, 10)?,
        exam_type: parse_enum(&row.get::<String>(11)?)?,
        exam_stage: parse_enum(&row.get::<String>(12)?)?,
        subject: parse_enum(&row.get::<String>(13)?)?,
        topic: get_opt_string(row, 14)?,
        difficulty_level: parse_enum(&row.get::<String>(15)?)?,
        source: get_opt_string(row, 16)?,
        created_at: parse_datetime(&row.get::<String>(17)?)?,
        updated_at: parse_datetime(&row.get::<String>(18)?)?,
    })
}

/// Optional equality filters for [`QbService::list_questions`].
#[derive(Debug, Clone, Default)]
pub struct QuestionFilter {
    pub exam_type: Option<ExamType>,
    pub exam_stage: Option<ExamStage>,
    pub subject: Option<Subject>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub year: Option<i32>,
}

impl QbService {
    /// Insert a question.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` if the payload fails validation, or a
    /// libSQL error if the insert is rejected.
    pub async fn create_question(&self, new: &NewQuestion) -> Result<Question, DatabaseError> {
        let new = new.clone().normalized();
        new.validate()?;
        let now = Utc::now();
        let [a, b, c, d] = &new.options;

        self.conn()
            .execute(
                "INSERT INTO questions (question_text, option_a, option_b, option_c, option_d,
                     correct_answer, explanation, has_diagram, diagram_description, year,
                     exam_type, exam_stage, subject, topic, difficulty_level, source,
                     created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
                libsql::params![
                    new.question_text.as_str(),
                    a.as_str(),
                    b.as_str(),
                    c.as_str(),
                    d.as_str(),
                    new.correct_answer.as_str(),
                    new.explanation.as_deref(),
                    i64::from(new.has_diagram),
                    new.diagram_description.as_deref(),
                    i64::from(new.year),
                    new.exam_type.as_str(),
                    new.exam_stage.as_str(),
                    new.subject.as_str(),
                    new.topic.as_deref(),
                    new.difficulty_level.as_str(),
                    new.source.as_deref(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        let id = self.conn().last_insert_rowid();
        tracing::debug!(question_id = id, "question created");

        Ok(new.into_question(id, now))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no question has this id.
    pub async fn get_question(&self, id: i64) -> Result<Question, DatabaseError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1");
        let mut rows = self.conn().query(&sql, [id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_question(&row)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_questions(&self) -> Result<i64, DatabaseError> {
        self.query_count("SELECT COUNT(*) FROM questions", ()).await
    }

    /// List questions matching every set filter field, oldest id first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be parsed.
    pub async fn list_questions(
        &self,
        filter: &QuestionFilter,
        limit: u32,
    ) -> Result<Vec<Question>, DatabaseError> {
        let mut clauses = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        let mut push = |column: &str, value: libsql::Value| {
            params.push(value);
            clauses.push(format!("{column} = ?{}", params.len()));
        };
        if let Some(exam_type) = filter.exam_type {
            push("exam_type", exam_type.as_str().into());
        }
        if let Some(exam_stage) = filter.exam_stage {
            push("exam_stage", exam_stage.as_str().into());
        }
        if let Some(subject) = filter.subject {
            push("subject", subject.as_str().into());
        }
        if let Some(difficulty) = filter.difficulty_level {
            push("difficulty_level", difficulty.as_str().into());
        }
        if let Some(year) = filter.year {
            push("year", i64::from(year).into());
        }

        let where_clause = if clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", clauses.join(" AND "))
        };
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions {where_clause} ORDER BY id LIMIT {limit}"
        );
        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut questions = Vec::new();
        while let Some(row) = rows.next().await? {
            questions.push(row_to_question(&row)?);
        }
        Ok(questions)
    }

    /// Apply a partial update and return the stored result.
    ///
    /// An empty update returns the question unchanged without touching
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` for invalid fields and
    /// `DatabaseError::NoResult` if the question does not exist.
    pub async fn update_question(
        &self,
        id: i64,
        update: QuestionUpdate,
    ) -> Result<Question, DatabaseError> {
        let update = update.normalized();
        if update.is_empty() {
            return self.get_question(id).await;
        }
        validate_update(&update)?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut set = |column: &str, value: libsql::Value| {
            params.push(value);
            sets.push(format!("{column} = ?{}", params.len()));
        };

        if let Some(text) = update.question_text {
            set("question_text", text.into());
        }
        if let Some([a, b, c, d]) = update.options {
            set("option_a", a.into());
            set("option_b", b.into());
            set("option_c", c.into());
            set("option_d", d.into());
        }
        if let Some(answer) = update.correct_answer {
            set("correct_answer", answer.as_str().into());
        }
        if let Some(explanation) = update.explanation {
            set("explanation", explanation.into());
        }
        if let Some(diagram) = update.diagram {
            set("has_diagram", i64::from(diagram.is_some()).into());
            set("diagram_description", diagram.into());
        }
        if let Some(year) = update.year {
            set("year", i64::from(year).into());
        }
        if let Some(exam_type) = update.exam_type {
            set("exam_type", exam_type.as_str().into());
        }
        if let Some(exam_stage) = update.exam_stage {
            set("exam_stage", exam_stage.as_str().into());
        }
        if let Some(subject) = update.subject {
            set("subject", subject.as_str().into());
        }
        if let Some(topic) = update.topic {
            set("topic", topic.into());
        }
        if let Some(difficulty) = update.difficulty_level {
            set("difficulty_level", difficulty.as_str().into());
        }
        if let Some(source) = update.source {
            set("source", source.into());
        }
        set("updated_at", Utc::now().to_rfc3339().into());
        params.push(id.into());

        let sql = format!(
            "UPDATE questions SET {} WHERE id = ?{}",
            sets.join(", "),
            params.len()
        );
        let changed = self
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_question(id).await
    }

    /// Delete a question. Its tag links, images, answer log and statistics
    /// go with it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the question does not exist.
    pub async fn delete_question(&self, id: i64) -> Result<(), DatabaseError> {
        let changed = self
            .conn()
            .execute("DELETE FROM questions WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(question_id = id, "question deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{arithmetic_question, seed_question, test_service};
    use crate::updates::question::QuestionUpdateBuilder;
    use pretty_assertions::assert_eq;
    use qb_core::enums::AnswerOption;

    #[tokio::test]
    async fn create_question_roundtrip() {
        let svc = test_service().await;
        let before = svc.count_questions().await.unwrap();

        let created = svc.create_question(&arithmetic_question()).await.unwrap();

        assert_eq!(svc.count_questions().await.unwrap(), before + 1);
        let fetched = svc.get_question(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.question_text, "2+2?");
        assert_eq!(fetched.options(), ["3", "4", "5", "6"]);
        assert_eq!(fetched.correct_answer, AnswerOption::B);
        assert_eq!(fetched.year, 2020);
        assert_eq!(fetched.exam_type, ExamType::Ssc);
        assert_eq!(fetched.exam_stage, ExamStage::Cbt1);
        assert_eq!(fetched.subject, Subject::Arithmetic);
        assert_eq!(fetched.difficulty_level, DifficultyLevel::Moderate);
    }

    #[tokio::test]
    async fn optional_fields_persist() {
        let svc = test_service().await;
        let mut new = arithmetic_question();
        new.explanation = Some("Two pairs make four.".into());
        new.has_diagram = true;
        new.diagram_description = Some("Two apples plus two apples".into());
        new.topic = Some("Addition".into());
        new.source = Some("Practice Set".into());
        new.difficulty_level = DifficultyLevel::Easy;

        let created = svc.create_question(&new).await.unwrap();
        let fetched = svc.get_question(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert!(fetched.has_diagram);
    }

    #[tokio::test]
    async fn empty_optionals_read_back_as_created() {
        let svc = test_service().await;
        let mut new = arithmetic_question();
        new.explanation = Some(String::new());
        new.topic = Some(String::new());
        new.source = Some(String::new());
        new.diagram_description = Some(String::new());

        let created = svc.create_question(&new).await.unwrap();
        assert_eq!(created.explanation, None);
        let fetched = svc.get_question(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn invalid_payload_is_not_inserted() {
        let svc = test_service().await;
        let mut new = arithmetic_question();
        new.question_text = String::new();

        let err = svc.create_question(&new).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Core(_)));
        assert_eq!(svc.count_questions().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn get_missing_question() {
        let svc = test_service().await;
        assert!(matches!(
            svc.get_question(42).await,
            Err(DatabaseError::NoResult)
        ));
    }

    #[tokio::test]
    async fn list_questions_filters() {
        let svc = test_service().await;
        seed_question(&svc).await;

        let mut reasoning = arithmetic_question();
        reasoning.subject = Subject::Reasoning;
        reasoning.exam_type = ExamType::Ntpc;
        reasoning.year = 2019;
        svc.create_question(&reasoning).await.unwrap();

        let all = svc
            .list_questions(&QuestionFilter::default(), 10)
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let filter = QuestionFilter {
            subject: Some(Subject::Reasoning),
            year: Some(2019),
            ..QuestionFilter::default()
        };
        let found = svc.list_questions(&filter, 10).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].exam_type, ExamType::Ntpc);

        let none = QuestionFilter {
            exam_type: Some(ExamType::Cgl),
            ..QuestionFilter::default()
        };
        assert!(svc.list_questions(&none, 10).await.unwrap().is_empty());

        let limited = svc
            .list_questions(&QuestionFilter::default(), 1)
            .await
            .unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[tokio::test]
    async fn update_question_partial() {
        let svc = test_service().await;
        let q = seed_question(&svc).await;

        let update = QuestionUpdateBuilder::new()
            .difficulty_level(DifficultyLevel::Hard)
            .topic(Some("Addition".into()))
            .diagram(Some("number line".into()))
            .build();
        let updated = svc.update_question(q.id, update).await.unwrap();

        assert_eq!(updated.difficulty_level, DifficultyLevel::Hard);
        assert_eq!(updated.topic.as_deref(), Some("Addition"));
        assert!(updated.has_diagram);
        assert_eq!(updated.diagram_description.as_deref(), Some("number line"));
        assert_eq!(updated.question_text, q.question_text);
        assert!(updated.updated_at >= q.updated_at);

        let cleared = svc
            .update_question(q.id, QuestionUpdateBuilder::new().diagram(None).build())
            .await
            .unwrap();
        assert!(!cleared.has_diagram);
        assert!(cleared.diagram_description.is_none());
    }

    #[tokio::test]
    async fn update_refiles_question_metadata() {
        let svc = test_service().await;
        let q = seed_question(&svc).await;

        let update = QuestionUpdateBuilder::new()
            .year(2023)
            .exam_type(ExamType::Cgl)
            .exam_stage(ExamStage::Tier2)
            .subject(Subject::Mathematics)
            .build();
        let updated = svc.update_question(q.id, update).await.unwrap();
        assert_eq!(updated.year, 2023);
        assert_eq!(updated.exam_type, ExamType::Cgl);
        assert_eq!(updated.exam_stage, ExamStage::Tier2);
        assert_eq!(updated.subject, Subject::Mathematics);
        assert_eq!(updated.question_text, q.question_text);

        let filter = QuestionFilter {
            subject: Some(Subject::Mathematics),
            exam_stage: Some(ExamStage::Tier2),
            ..QuestionFilter::default()
        };
        assert_eq!(svc.list_questions(&filter, 10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_with_empty_text_reads_back_as_none() {
        let svc = test_service().await;
        let q = seed_question(&svc).await;

        let update = QuestionUpdateBuilder::new()
            .explanation(Some(String::new()))
            .topic(Some(String::new()))
            .build();
        let updated = svc.update_question(q.id, update).await.unwrap();
        assert_eq!(updated.explanation, None);
        assert_eq!(updated.topic, None);
        assert_eq!(svc.get_question(q.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_question_options_and_answer() {
        let svc = test_service().await;
        let q = seed_question(&svc).await;

        let update = QuestionUpdateBuilder::new()
            .options(["4", "3", "5", "6"])
            .correct_answer(AnswerOption::A)
            .build();
        let updated = svc.update_question(q.id, update).await.unwrap();
        assert_eq!(updated.correct_option_text(), "4");
    }

    #[tokio::test]
    async fn empty_update_is_noop() {
        let svc = test_service().await;
        let q = seed_question(&svc).await;
        let same = svc
            .update_question(q.id, QuestionUpdateBuilder::new().build())
            .await
            .unwrap();
        assert_eq!(same, q);
    }

    #[tokio::test]
    async fn update_rejects_overlong_topic() {
        let svc = test_service().await;
        let q = seed_question(&svc).await;
        let update = QuestionUpdateBuilder::new()
            .topic(Some("t".repeat(101)))
            .build();
        assert!(matches!(
            svc.update_question(q.id, update).await,
            Err(DatabaseError::Core(_))
        ));
    }

    #[tokio::test]
    async fn update_missing_question() {
        let svc = test_service().await;
        let update = QuestionUpdateBuilder::new().question_text("?").build();
        assert!(matches!(
            svc.update_question(9, update).await,
            Err(DatabaseError::NoResult)
        ));
    }

    #[tokio::test]
    async fn delete_question_removes_row() {
        let svc = test_service().await;
        let q = seed_question(&svc).await;
        svc.delete_question(q.id).await.unwrap();
        assert_eq!(svc.count_questions().await.unwrap(), 0);
        assert!(matches!(
            svc.delete_question(q.id).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
