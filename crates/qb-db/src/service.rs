//! Service layer hosting the repository methods.
//!
//! `QbService` wraps `QbDb` (raw database access) and the `PasswordHasher`
//! used when users register or change passwords. All repo methods are
//! implemented as `impl QbService` blocks under `repos/`.

use qb_auth::PasswordHasher;

use crate::QbDb;
use crate::error::DatabaseError;

pub struct QbService {
    db: QbDb,
    hasher: PasswordHasher,
}

impl QbService {
    /// Open a local database and wrap it.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `hasher` - Password hasher used for user credentials.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, hasher: PasswordHasher) -> Result<Self, DatabaseError> {
        let db = QbDb::open_local(db_path).await?;
        Ok(Self { db, hasher })
    }

    /// Create from an existing `QbDb`.
    #[must_use]
    pub const fn from_db(db: QbDb, hasher: PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &QbDb {
        &self.db
    }

    #[must_use]
    pub const fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    pub(crate) const fn conn(&self) -> &libsql::Connection {
        self.db.conn()
    }

    /// Run a `SELECT COUNT(*)`-shaped query and return the single value.
    pub(crate) async fn query_count(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<i64, DatabaseError> {
        let mut rows = self.conn().query(sql, params).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }
}
