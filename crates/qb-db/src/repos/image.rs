//! Question image repository.

use chrono::Utc;

use qb_core::entities::{NewQuestionImage, QuestionImage};

use crate::error::DatabaseError;
use crate::helpers::{get_i32, get_opt_string, parse_datetime};
use crate::service::QbService;

fn row_to_image(row: &libsql::Row) -> Result<QuestionImage, DatabaseError> {
    Ok(QuestionImage {
        id: row.get::<i64>(0)?,
        question_id: row.get::<i64>(1)?,
        image_path: row.get::<String>(2)?,
        image_type: get_opt_string(row, 3)?,
        caption: get_opt_string(row, 4)?,
        display_order: get_i32(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl QbService {
    /// Attach an image to a question.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` for an invalid payload, or a libSQL error
    /// if the question does not exist.
    pub async fn add_image(&self, new: &NewQuestionImage) -> Result<QuestionImage, DatabaseError> {
        let new = new.clone().normalized();
        new.validate()?;
        let now = Utc::now();
        self.conn()
            .execute(
                "INSERT INTO question_images
                     (question_id, image_path, image_type, caption, display_order, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    new.question_id,
                    new.image_path.as_str(),
                    new.image_type.as_deref(),
                    new.caption.as_deref(),
                    i64::from(new.display_order),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        Ok(QuestionImage {
            id: self.conn().last_insert_rowid(),
            question_id: new.question_id,
            image_path: new.image_path,
            image_type: new.image_type,
            caption: new.caption,
            display_order: new.display_order,
            created_at: now,
            updated_at: now,
        })
    }

    /// Images of a question in display order; ties fall back to insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn images_for_question(
        &self,
        question_id: i64,
    ) -> Result<Vec<QuestionImage>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, question_id, image_path, image_type, caption, display_order, created_at, updated_at
                 FROM question_images WHERE question_id = ?1
                 ORDER BY display_order, id",
                [question_id],
            )
            .await?;
        let mut images = Vec::new();
        while let Some(row) = rows.next().await? {
            images.push(row_to_image(&row)?);
        }
        Ok(images)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no image has this id.
    pub async fn delete_image(&self, id: i64) -> Result<(), DatabaseError> {
        let changed = self
            .conn()
            .execute("DELETE FROM question_images WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }
}
