//! Database connection and table management.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::Result;
use crate::schema;

/// Main database handle.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    path: Option<PathBuf>,
}

impl Database {
    /// Open or create a database file at the specified path.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        info!(path = %path.display(), "opened pair database");
        Ok(Self { pool, path: Some(path.to_path_buf()) })
    }

    /// Open a private in-memory database.
    ///
    /// The pool holds exactly one connection for its whole lifetime, since
    /// every SQLite in-memory connection is a separate database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool, path: None })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Database file path; `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create the entity_pairs table and its name index if missing.
    pub async fn initialize(&self) -> Result<()> {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                entity_name TEXT NOT NULL,
                curie_a TEXT NOT NULL,
                label_a TEXT,
                curie_b TEXT NOT NULL,
                label_b TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                notes TEXT,
                evaluation TEXT,
                evaluation_notes TEXT
            )
            "#,
            schema::TABLE_ENTITY_PAIRS
        ))
        .execute(&self.pool)
        .await?;

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_entity_pairs_name ON {} (entity_name)",
            schema::TABLE_ENTITY_PAIRS
        ))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Check if a table exists.
    pub async fn table_exists(&self, name: &str) -> Result<bool> {
        let found: Option<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(found.is_some())
    }

    /// Get table statistics.
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let (pairs, evaluated): (i64, i64) = sqlx::query_as(&format!(
            "SELECT COUNT(*), COUNT(evaluation) FROM {}",
            schema::TABLE_ENTITY_PAIRS
        ))
        .fetch_one(&self.pool)
        .await?;

        Ok(DatabaseStats {
            pairs: pairs.max(0) as u64,
            evaluated: evaluated.max(0) as u64,
        })
    }
}

/// Database statistics.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct DatabaseStats {
    pub pairs: u64,
    pub evaluated: u64,
}

impl DatabaseStats {
    pub fn pending(&self) -> u64 {
        self.pairs.saturating_sub(self.evaluated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_creates_table() {
        let db = Database::in_memory().await.unwrap();
        assert!(!db.table_exists(schema::TABLE_ENTITY_PAIRS).await.unwrap());
        db.initialize().await.unwrap();
        assert!(db.table_exists(schema::TABLE_ENTITY_PAIRS).await.unwrap());
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let db = Database::in_memory().await.unwrap();
        db.initialize().await.unwrap();
        db.initialize().await.unwrap();
        assert_eq!(db.stats().await.unwrap(), DatabaseStats::default());
    }

    #[tokio::test]
    async fn test_open_creates_file_and_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("pairs.db");
        let db = Database::open(&path).await.unwrap();
        db.initialize().await.unwrap();
        assert!(path.exists());
        assert_eq!(db.path(), Some(path.as_path()));
    }

    #[test]
    fn test_pending_count() {
        let stats = DatabaseStats { pairs: 5, evaluated: 2 };
        assert_eq!(stats.pending(), 3);
    }
}
