//! Entity pair repository.
//!
//! Provides CRUD operations for entity pairs. Each operation is a single
//! statement; nothing spans more than one row.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::debug;

use crate::database::Database;
use crate::error::Result;
use crate::schema::{EntityPair, Evaluation, NewPair, TABLE_ENTITY_PAIRS};

/// Storage for entity pairs.
///
/// Listings are ordered by `entity_name`, ties by id. Unknown ids are not
/// errors: lookups return `None` and mutations return `false`.
#[async_trait]
pub trait PairStore: Send + Sync {
    /// Insert a pair and return its new id. Blank required fields are
    /// rejected with [`DbError::Validation`](crate::DbError::Validation).
    async fn create(&self, pair: &NewPair) -> Result<i64>;

    /// All pairs sorted by entity name.
    async fn list_all(&self) -> Result<Vec<EntityPair>>;

    async fn get_by_id(&self, id: i64) -> Result<Option<EntityPair>>;

    /// Overwrite the evaluation and its notes together.
    async fn set_evaluation(
        &self,
        id: i64,
        evaluation: Evaluation,
        notes: Option<&str>,
    ) -> Result<bool>;

    async fn delete_by_id(&self, id: i64) -> Result<bool>;
}

/// Row shape as stored; the evaluation column is free text.
#[derive(sqlx::FromRow)]
struct PairRow {
    id: i64,
    entity_name: String,
    curie_a: String,
    label_a: Option<String>,
    curie_b: String,
    label_b: Option<String>,
    notes: Option<String>,
    created_at: NaiveDateTime,
    evaluation: Option<String>,
    evaluation_notes: Option<String>,
}

impl TryFrom<PairRow> for EntityPair {
    type Error = crate::error::DbError;

    fn try_from(row: PairRow) -> Result<Self> {
        let evaluation = row.evaluation.as_deref().map(str::parse::<Evaluation>).transpose()?;
        Ok(EntityPair {
            id: row.id,
            entity_name: row.entity_name,
            curie_a: row.curie_a,
            label_a: row.label_a,
            curie_b: row.curie_b,
            label_b: row.label_b,
            notes: row.notes,
            created_at: row.created_at,
            evaluation,
            evaluation_notes: row.evaluation_notes,
        })
    }
}

const SELECT_COLUMNS: &str = "id, entity_name, curie_a, label_a, curie_b, label_b, notes, \
                              created_at, evaluation, evaluation_notes";

/// SQLite-backed pair repository.
#[derive(Clone)]
pub struct PairRepository {
    db: Arc<Database>,
}

impl PairRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Get underlying database reference.
    pub fn db(&self) -> Arc<Database> {
        self.db.clone()
    }
}

#[async_trait]
impl PairStore for PairRepository {
    async fn create(&self, pair: &NewPair) -> Result<i64> {
        pair.validate()?;

        let result = sqlx::query(&format!(
            "INSERT INTO {TABLE_ENTITY_PAIRS} \
             (entity_name, curie_a, label_a, curie_b, label_b, notes) \
             VALUES (?, ?, ?, ?, ?, ?)"
        ))
        .bind(&pair.entity_name)
        .bind(&pair.curie_a)
        .bind(&pair.label_a)
        .bind(&pair.curie_b)
        .bind(&pair.label_b)
        .bind(&pair.notes)
        .execute(self.db.pool())
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, entity_name = %pair.entity_name, "inserted entity pair");
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<EntityPair>> {
        let rows: Vec<PairRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM {TABLE_ENTITY_PAIRS} ORDER BY entity_name, id"
        ))
        .fetch_all(self.db.pool())
        .await?;

        rows.into_iter().map(EntityPair::try_from).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<EntityPair>> {
        let row: Option<PairRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM {TABLE_ENTITY_PAIRS} WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        row.map(EntityPair::try_from).transpose()
    }

    async fn set_evaluation(
        &self,
        id: i64,
        evaluation: Evaluation,
        notes: Option<&str>,
    ) -> Result<bool> {
        let result = sqlx::query(&format!(
            "UPDATE {TABLE_ENTITY_PAIRS} SET evaluation = ?, evaluation_notes = ? WHERE id = ?"
        ))
        .bind(evaluation.as_str())
        .bind(notes)
        .bind(id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(&format!("DELETE FROM {TABLE_ENTITY_PAIRS} WHERE id = ?"))
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
