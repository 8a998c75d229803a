//! In-memory pair store.
//!
//! Same contract as [`PairRepository`](crate::PairRepository) without a
//! database; used by workflow and web tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::pairs::PairStore;
use crate::schema::{EntityPair, Evaluation, NewPair};

#[derive(Default)]
struct State {
    /// Last id handed out; ids are never reused after deletion.
    last_id: i64,
    rows: BTreeMap<i64, EntityPair>,
}

#[derive(Default)]
pub struct InMemoryPairStore {
    state: RwLock<State>,
}

impl InMemoryPairStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.rows.is_empty()
    }
}

#[async_trait]
impl PairStore for InMemoryPairStore {
    async fn create(&self, pair: &NewPair) -> Result<i64> {
        pair.validate()?;

        let mut state = self.state.write().await;
        state.last_id += 1;
        let id = state.last_id;
        state.rows.insert(id, EntityPair {
            id,
            entity_name: pair.entity_name.clone(),
            curie_a: pair.curie_a.clone(),
            label_a: pair.label_a.clone(),
            curie_b: pair.curie_b.clone(),
            label_b: pair.label_b.clone(),
            notes: pair.notes.clone(),
            created_at: chrono::Utc::now().naive_utc(),
            evaluation: None,
            evaluation_notes: None,
        });
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<EntityPair>> {
        let state = self.state.read().await;
        // BTreeMap iterates by id, so a stable sort keeps id order within a name.
        let mut pairs: Vec<EntityPair> = state.rows.values().cloned().collect();
        pairs.sort_by(|a, b| a.entity_name.cmp(&b.entity_name));
        Ok(pairs)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<EntityPair>> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn set_evaluation(
        &self,
        id: i64,
        evaluation: Evaluation,
        notes: Option<&str>,
    ) -> Result<bool> {
        let mut state = self.state.write().await;
        match state.rows.get_mut(&id) {
            Some(pair) => {
                pair.evaluation = Some(evaluation);
                pair.evaluation_notes = notes.map(String::from);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }
}
