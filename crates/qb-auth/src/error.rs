use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("bcrypt cost {0} is outside the supported range 4..=31")]
    InvalidCost(u32),

    #[error("Error hashing password: {0}")]
    Hashing(String),
}
