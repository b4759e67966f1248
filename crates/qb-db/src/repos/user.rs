//! User repository for registration, lookup and password changes.

use chrono::Utc;

use qb_auth::HashedPassword;
use qb_core::entities::User;
use qb_core::validation::check_not_blank;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::QbService;

const USER_COLUMNS: &str = "id, email, username, hashed_password, created_at, updated_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get::<i64>(0)?,
        email: row.get::<String>(1)?,
        username: row.get::<String>(2)?,
        hashed_password: Some(HashedPassword::from_stored(row.get::<String>(3)?)),
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl QbService {
    /// Create a user with a freshly hashed password.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Auth` if the password is rejected,
    /// `DatabaseError::Core` for a blank email or username, and a libSQL error
    /// if the email or username is already registered.
    pub async fn register_user(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<User, DatabaseError> {
        check_not_blank("email", email)?;
        check_not_blank("username", username)?;

        let mut user = User::new(email, username);
        user.set_password(self.hasher(), password)?;
        let hashed = user
            .hashed_password
            .as_ref()
            .ok_or_else(|| DatabaseError::InvalidState("password hash missing after set".into()))?;

        self.conn()
            .execute(
                "INSERT INTO users (email, username, hashed_password, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    email,
                    username,
                    hashed.as_str(),
                    user.created_at.to_rfc3339(),
                    user.updated_at.to_rfc3339()
                ],
            )
            .await?;
        user.id = self.conn().last_insert_rowid();
        tracing::info!(user_id = user.id, username, "user registered");
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no user has this id.
    pub async fn get_user(&self, id: i64) -> Result<User, DatabaseError> {
        self.fetch_user("id", id.into()).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no user has this username.
    pub async fn get_user_by_username(&self, username: &str) -> Result<User, DatabaseError> {
        self.fetch_user("username", username.into()).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no user has this email.
    pub async fn get_user_by_email(&self, email: &str) -> Result<User, DatabaseError> {
        self.fetch_user("email", email.into()).await
    }

    /// Hash `new_password`, persist it, then store it on `user`.
    ///
    /// `user` is only modified once the row has been written, so on any error
    /// it still matches storage.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Auth` for a rejected password and
    /// `DatabaseError::NoResult` if the user row no longer exists.
    pub async fn change_password(
        &self,
        user: &mut User,
        new_password: &str,
    ) -> Result<(), DatabaseError> {
        let hashed = self.hasher().hash(new_password).inspect_err(|e| {
            tracing::error!(user = %user.username, error = %e, "Error hashing password");
        })?;
        let updated_at = Utc::now();

        let changed = self
            .conn()
            .execute(
                "UPDATE users SET hashed_password = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![hashed.as_str(), updated_at.to_rfc3339(), user.id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        user.hashed_password = Some(hashed);
        user.updated_at = updated_at;
        tracing::info!(user_id = user.id, "password changed");
        Ok(())
    }

    async fn fetch_user(&self, column: &str, value: libsql::Value) -> Result<User, DatabaseError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = ?1");
        let mut rows = self.conn().query(&sql, [value]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }
}
