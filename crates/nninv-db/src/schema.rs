//! Schema definitions for the entity pair table.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::DbError;

pub const TABLE_ENTITY_PAIRS: &str = "entity_pairs";

// =============================================================================
// Evaluation
// =============================================================================

/// A reviewer's judgment on whether the two CURIEs denote the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluation {
    Same,
    Different,
    Unsure,
}

impl Evaluation {
    pub const ALL: [Evaluation; 3] = [Evaluation::Same, Evaluation::Different, Evaluation::Unsure];

    pub fn as_str(&self) -> &'static str {
        match self {
            Evaluation::Same      => "same",
            Evaluation::Different => "different",
            Evaluation::Unsure    => "unsure",
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Evaluation {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "same"      => Ok(Evaluation::Same),
            "different" => Ok(Evaluation::Different),
            "unsure"    => Ok(Evaluation::Unsure),
            other => Err(DbError::InvalidValue(format!("unknown evaluation '{other}'"))),
        }
    }
}

// =============================================================================
// Entity pair
// =============================================================================

/// Two CURIEs put up for review under a shared entity name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPair {
    pub id: i64,
    pub entity_name: String,
    pub curie_a: String,
    pub label_a: Option<String>,
    pub curie_b: String,
    pub label_b: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub evaluation: Option<Evaluation>,
    pub evaluation_notes: Option<String>,
}

/// Fields supplied when a pair is created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPair {
    pub entity_name: String,
    pub curie_a: String,
    pub curie_b: String,
    pub label_a: Option<String>,
    pub label_b: Option<String>,
    pub notes: Option<String>,
}

impl NewPair {
    pub fn new(
        entity_name: impl Into<String>,
        curie_a: impl Into<String>,
        curie_b: impl Into<String>,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            curie_a: curie_a.into(),
            curie_b: curie_b.into(),
            ..Self::default()
        }
    }

    pub fn with_labels(mut self, label_a: Option<&str>, label_b: Option<&str>) -> Self {
        self.label_a = label_a.map(String::from);
        self.label_b = label_b.map(String::from);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Reject pairs missing an entity name or either CURIE.
    pub fn validate(&self) -> Result<(), DbError> {
        let missing: Vec<&str> = [
            ("entity_name", &self.entity_name),
            ("curie_a", &self.curie_a),
            ("curie_b", &self.curie_b),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DbError::Validation(format!("missing required field(s): {}", missing.join(", "))))
        }
    }
}
