//! Password hashing parameters.

use qb_auth::HashConfig;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

fn default_cost() -> u32 {
    HashConfig::default().cost
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// bcrypt work factor.
    #[serde(default = "default_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_cost(),
        }
    }
}

impl AuthConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when the cost is outside 4..=31.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                field: "auth.bcrypt_cost".into(),
                reason: format!(
                    "{} is outside {MIN_BCRYPT_COST}..={MAX_BCRYPT_COST}",
                    self.bcrypt_cost
                ),
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn hash_config(&self) -> HashConfig {
        HashConfig {
            cost: self.bcrypt_cost,
        }
    }
}
