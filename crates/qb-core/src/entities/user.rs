use chrono::{DateTime, Utc};
use qb_auth::{AuthError, HashedPassword, PasswordHasher};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A registered account.
///
/// `hashed_password` only ever holds a [`HashedPassword`] produced by the
/// hasher (or restored from storage) and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    /// Row id. `0` until the user has been persisted.
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(skip)]
    pub hashed_password: Option<HashedPassword>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build an unsaved user without a password.
    #[must_use]
    pub fn new(email: impl Into<String>, username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            email: email.into(),
            username: username.into(),
            hashed_password: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Hash `password` and store it, replacing any previous hash.
    ///
    /// Does not persist. On error the stored hash is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmptyPassword` / `AuthError::PasswordTooShort` for
    /// rejected input and `AuthError::Hashing` if bcrypt fails.
    pub fn set_password(
        &mut self,
        hasher: &PasswordHasher,
        password: &str,
    ) -> Result<(), AuthError> {
        let hashed = hasher.hash(password).inspect_err(|e| {
            tracing::error!(user = %self.username, error = %e, "Error hashing password");
        })?;
        self.hashed_password = Some(hashed);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Check `password` against the stored hash. Never fails; any problem
    /// (empty input, no stored hash, mismatch, malformed hash) yields `false`.
    #[must_use]
    pub fn verify_password(&self, hasher: &PasswordHasher, password: &str) -> bool {
        match &self.hashed_password {
            Some(hashed) if !password.is_empty() => hasher.verify(password, hashed),
            _ => {
                tracing::warn!(user = %self.username, "Password or hashed_password is empty");
                false
            }
        }
    }
}
