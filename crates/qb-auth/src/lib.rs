//! # qb-auth
//!
//! Credential hashing for quizbank users.
//!
//! Wraps `bcrypt` behind an explicitly constructed [`PasswordHasher`]. Hashes
//! only ever exist as [`HashedPassword`] values, which can be produced by the
//! hasher or restored from storage, never built from plaintext.

pub mod error;
pub mod hasher;

pub use error::AuthError;
pub use hasher::{HashConfig, HashedPassword, MIN_PASSWORD_LENGTH, PasswordHasher};
