//! Review workflow: investigate a pair, record an evaluation, add and
//! delete pairs. Storage and normalization are injected as trait objects.

use std::sync::Arc;

use nninv_clients::{NormalizeOptions, Normalizer};
use nninv_db::{EntityPair, Evaluation, NewPair, PairStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::annotate::{AnnotatedCurie, CliqueHints, NormalizationStatus};
use crate::error::{Result, ReviewError, EVALUATION_REQUIRED, PAIR_FIELDS_REQUIRED};
use crate::navigation::{neighbors, Neighbors};

/// Everything the investigation page shows for one pair.
#[derive(Debug, Clone, Serialize)]
pub struct Investigation {
    pub pair: EntityPair,
    pub a: AnnotatedCurie,
    pub b: AnnotatedCurie,
    pub hints: CliqueHints,
    pub status: NormalizationStatus,
    pub neighbors: Neighbors,
}

/// Evaluation form as posted; both fields may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluationSubmission {
    #[serde(default)]
    pub evaluation: Option<String>,
    #[serde(default)]
    pub evaluation_notes: Option<String>,
}

/// Add-pair form as posted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPairForm {
    #[serde(default)]
    pub entity_name: Option<String>,
    #[serde(default)]
    pub curie_a: Option<String>,
    #[serde(default)]
    pub label_a: Option<String>,
    #[serde(default)]
    pub curie_b: Option<String>,
    #[serde(default)]
    pub label_b: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl NewPairForm {
    fn into_new_pair(self) -> Result<NewPair> {
        let (Some(name), Some(curie_a), Some(curie_b)) = (
            non_blank(self.entity_name.as_deref()),
            non_blank(self.curie_a.as_deref()),
            non_blank(self.curie_b.as_deref()),
        ) else {
            return Err(ReviewError::Validation(PAIR_FIELDS_REQUIRED.to_string()));
        };

        let mut pair = NewPair::new(name, curie_a, curie_b)
            .with_labels(non_blank(self.label_a.as_deref()), non_blank(self.label_b.as_deref()));
        if let Some(notes) = non_blank(self.notes.as_deref()) {
            pair = pair.with_notes(notes);
        }
        Ok(pair)
    }
}

pub struct ReviewWorkflow {
    store: Arc<dyn PairStore>,
    normalizer: Arc<dyn Normalizer>,
    options: NormalizeOptions,
}

impl ReviewWorkflow {
    pub fn new(store: Arc<dyn PairStore>, normalizer: Arc<dyn Normalizer>) -> Self {
        Self { store, normalizer, options: NormalizeOptions::default() }
    }

    pub fn with_options(mut self, options: NormalizeOptions) -> Self {
        self.options = options;
        self
    }

    /// All pairs in listing order.
    pub async fn list(&self) -> Result<Vec<EntityPair>> {
        Ok(self.store.list_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<EntityPair> {
        self.store.get_by_id(id).await?.ok_or(ReviewError::NotFound(id))
    }

    /// Load a pair and normalize both of its CURIEs in one request.
    ///
    /// A normalizer failure does not fail the investigation; it is
    /// reported through [`NormalizationStatus::Unavailable`].
    pub async fn investigate(&self, id: i64) -> Result<Investigation> {
        let pair = self.get(id).await?;
        let curies = [pair.curie_a.clone(), pair.curie_b.clone()];

        let (a, b, status) = match self.normalizer.normalize(&curies, &self.options).await {
            Ok(nodes) => (
                AnnotatedCurie::from_nodes(&pair.curie_a, &nodes),
                AnnotatedCurie::from_nodes(&pair.curie_b, &nodes),
                NormalizationStatus::Ok,
            ),
            Err(e) => {
                warn!(id, error = %e, "normalization unavailable");
                (
                    AnnotatedCurie::new(&pair.curie_a, None),
                    AnnotatedCurie::new(&pair.curie_b, None),
                    NormalizationStatus::Unavailable(e.to_string()),
                )
            }
        };

        let hints = CliqueHints::derive(a.result.as_ref(), b.result.as_ref());
        let listing = self.store.list_all().await?;
        debug!(id, same_clique = hints.same_clique, "investigated pair");

        Ok(Investigation {
            neighbors: neighbors(&listing, id),
            pair,
            a,
            b,
            hints,
            status,
        })
    }

    /// Record a reviewer's judgment, replacing any earlier one.
    pub async fn submit_evaluation(
        &self,
        id: i64,
        submission: EvaluationSubmission,
    ) -> Result<Evaluation> {
        let raw = non_blank(submission.evaluation.as_deref())
            .ok_or_else(|| ReviewError::Validation(EVALUATION_REQUIRED.to_string()))?;
        let evaluation: Evaluation = raw
            .parse()
            .map_err(|_| ReviewError::Validation(format!("Unknown evaluation: {raw}")))?;
        let notes = non_blank(submission.evaluation_notes.as_deref());

        if !self.store.set_evaluation(id, evaluation, notes).await? {
            return Err(ReviewError::NotFound(id));
        }
        info!(id, %evaluation, "evaluation saved");
        Ok(evaluation)
    }

    /// Create a pair from the add form and return it as stored.
    pub async fn add_pair(&self, form: NewPairForm) -> Result<EntityPair> {
        let new_pair = form.into_new_pair()?;
        let id = self.store.create(&new_pair).await?;
        info!(id, entity_name = %new_pair.entity_name, "pair added");
        self.get(id).await
    }

    pub async fn delete_pair(&self, id: i64) -> Result<bool> {
        let deleted = self.store.delete_by_id(id).await?;
        if deleted {
            info!(id, "pair deleted");
        }
        Ok(deleted)
    }
}
