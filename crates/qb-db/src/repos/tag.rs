//! Tag repository covering tags and the question/tag link table.

use chrono::Utc;

use qb_core::entities::{Question, QuestionTag, Tag};

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::repos::question::{QUESTION_COLUMNS, row_to_question};
use crate::service::QbService;

fn row_to_tag(row: &libsql::Row) -> Result<Tag, DatabaseError> {
    Ok(Tag {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl QbService {
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` for an invalid name, or a libSQL error if
    /// the name is already taken.
    pub async fn create_tag(&self, name: &str) -> Result<Tag, DatabaseError> {
        Tag::validate_name(name)?;
        let now = Utc::now();
        self.conn()
            .execute(
                "INSERT INTO tags (name, created_at) VALUES (?1, ?2)",
                libsql::params![name, now.to_rfc3339()],
            )
            .await?;
        Ok(Tag {
            id: self.conn().last_insert_rowid(),
            name: name.to_string(),
            created_at: now,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no tag has this name.
    pub async fn get_tag_by_name(&self, name: &str) -> Result<Tag, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT id, name, created_at FROM tags WHERE name = ?1", [name])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_tag(&row)
    }

    /// Return the existing tag with this name, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if lookup or creation fails.
    pub async fn get_or_create_tag(&self, name: &str) -> Result<Tag, DatabaseError> {
        match self.get_tag_by_name(name).await {
            Ok(tag) => Ok(tag),
            Err(DatabaseError::NoResult) => self.create_tag(name).await,
            Err(e) => Err(e),
        }
    }

    /// Link a tag to a question. Linking the same pair twice is an error.
    ///
    /// # Errors
    ///
    /// Returns a libSQL error for unknown ids or a duplicate link.
    pub async fn tag_question(
        &self,
        question_id: i64,
        tag_id: i64,
    ) -> Result<QuestionTag, DatabaseError> {
        let now = Utc::now();
        self.conn()
            .execute(
                "INSERT INTO question_tags (question_id, tag_id, created_at) VALUES (?1, ?2, ?3)",
                libsql::params![question_id, tag_id, now.to_rfc3339()],
            )
            .await?;
        Ok(QuestionTag {
            question_id,
            tag_id,
            created_at: now,
        })
    }

    /// Remove a link. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the delete fails.
    pub async fn untag_question(
        &self,
        question_id: i64,
        tag_id: i64,
    ) -> Result<bool, DatabaseError> {
        let changed = self
            .conn()
            .execute(
                "DELETE FROM question_tags WHERE question_id = ?1 AND tag_id = ?2",
                [question_id, tag_id],
            )
            .await?;
        Ok(changed > 0)
    }

    /// Tags on a question, by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn tags_for_question(&self, question_id: i64) -> Result<Vec<Tag>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT t.id, t.name, t.created_at
                 FROM question_tags qt JOIN tags t ON t.id = qt.tag_id
                 WHERE qt.question_id = ?1
                 ORDER BY t.name",
                [question_id],
            )
            .await?;
        let mut tags = Vec::new();
        while let Some(row) = rows.next().await? {
            tags.push(row_to_tag(&row)?);
        }
        Ok(tags)
    }

    /// Questions carrying a tag, oldest id first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn questions_for_tag(&self, tag_id: i64) -> Result<Vec<Question>, DatabaseError> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions
             WHERE id IN (SELECT question_id FROM question_tags WHERE tag_id = ?1)
             ORDER BY id"
        );
        let mut rows = self.conn().query(&sql, [tag_id]).await?;
        let mut questions = Vec::new();
        while let Some(row) = rows.next().await? {
            questions.push(row_to_question(&row)?);
        }
        Ok(questions)
    }
}
