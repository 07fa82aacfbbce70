//! SQLite connection management and schema migrations.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use uuid::Uuid;

use culina_core::Result;

/// Embedded schema migrations, applied whenever a database is opened.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Handle to an open, migrated SQLite database.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database at `url`, creating the file if necessary, and
    /// bring the schema up to date.
    ///
    /// `url` uses sqlx syntax, e.g. `sqlite:culina.db`.
    pub async fn connect(url: &str) -> Result<Self> {
        log::debug!("opening database at {url}");
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        MIGRATOR.run(&pool).await?;
        log::info!("database ready at {url}");
        Ok(Self { pool })
    }

    /// Open a private in-memory database, for tests.
    ///
    /// Capped at one connection: every connection to `:memory:` is its own
    /// database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        MIGRATOR.run(&pool).await?;
        Ok(Self { pool })
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run a trivial query to confirm the database answers.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Parse a stored TEXT id back into a UUID.
///
/// A failure means the row is corrupt and is surfaced as a decode error.
pub(crate) fn parse_uuid(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|e| sqlx::Error::Decode(Box::new(e)).into())
}
