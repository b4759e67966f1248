//! bcrypt password hasher.

use std::fmt;

use crate::error::AuthError;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// Hashing parameters. Passed to [`PasswordHasher::new`]; there is no
/// process-wide default instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashConfig {
    /// bcrypt work factor (log2 rounds).
    pub cost: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

/// A salted one-way password hash in bcrypt modular crypt format.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Wrap a hash previously produced by [`PasswordHasher::hash`] and read
    /// back from storage. The value is not checked here; a malformed hash
    /// simply never verifies.
    #[must_use]
    pub const fn from_stored(hash: String) -> Self {
        Self(hash)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword(<redacted>)")
    }
}

/// Hashes and verifies passwords with bcrypt.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    config: HashConfig,
}

impl PasswordHasher {
    /// Build a hasher for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCost` if the cost is outside bcrypt's 4..=31.
    pub fn new(config: HashConfig) -> Result<Self, AuthError> {
        if config.cost < MIN_COST || config.cost > MAX_COST {
            return Err(AuthError::InvalidCost(config.cost));
        }
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> HashConfig {
        self.config
    }

    /// Validate and hash a plaintext password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmptyPassword` or `AuthError::PasswordTooShort` for
    /// rejected input, and `AuthError::Hashing` if bcrypt itself fails.
    pub fn hash(&self, plaintext: &str) -> Result<HashedPassword, AuthError> {
        if plaintext.is_empty() {
            return Err(AuthError::EmptyPassword);
        }
        if plaintext.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        let hash = bcrypt::hash(plaintext, self.config.cost).map_err(|e| {
            tracing::error!(error = %e, "bcrypt hashing failed");
            AuthError::Hashing(e.to_string())
        })?;
        tracing::info!("Password hashed successfully");
        Ok(HashedPassword(hash))
    }

    /// Check a candidate against a stored hash.
    ///
    /// Never fails: empty input, a mismatch, and a malformed stored hash all
    /// return `false`.
    #[must_use]
    pub fn verify(&self, candidate: &str, stored: &HashedPassword) -> bool {
        if candidate.is_empty() || stored.0.is_empty() {
            tracing::warn!("Password or hashed_password is empty");
            return false;
        }
        match bcrypt::verify(candidate, &stored.0) {
            Ok(true) => true,
            Ok(false) => {
                tracing::warn!("Invalid password");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Error verifying password");
                false
            }
        }
    }
}
