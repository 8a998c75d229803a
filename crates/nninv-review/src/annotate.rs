//! Per-CURIE view of a normalization answer and the hints derived from
//! comparing the two sides of a pair.

use nninv_clients::{NormalizationResult, NormalizedNodes};
use nninv_common::resolve_link;
use serde::Serialize;

/// One side of a pair as shown on the investigation page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedCurie {
    pub curie: String,
    /// Browsable link for `curie`; empty when the CURIE is malformed.
    pub url: String,
    /// `None` when NodeNorm does not know the CURIE or was unreachable.
    pub result: Option<NormalizationResult>,
}

impl AnnotatedCurie {
    pub fn new(curie: &str, result: Option<NormalizationResult>) -> Self {
        Self {
            curie: curie.to_string(),
            url: resolve_link(curie),
            result,
        }
    }

    /// `curie`'s entry in a normalization response. Both sides of a pair
    /// may name the same CURIE, so the response is only read.
    pub fn from_nodes(curie: &str, nodes: &NormalizedNodes) -> Self {
        Self::new(curie, nodes.get(curie).cloned().flatten())
    }

    pub fn preferred_id(&self) -> Option<&str> {
        self.result.as_ref().map(NormalizationResult::preferred_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum NormalizationStatus {
    Ok,
    /// The normalizer could not be reached; carries the error text.
    Unavailable(String),
}

impl NormalizationStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CliqueHints {
    /// Both CURIEs normalize to the same preferred identifier.
    pub same_clique: bool,
    /// One side is typed as a cell and the other as a chemical.
    pub category_mismatch: bool,
}

impl CliqueHints {
    /// Both hints stay false unless both sides normalized.
    pub fn derive(a: Option<&NormalizationResult>, b: Option<&NormalizationResult>) -> Self {
        let (Some(a), Some(b)) = (a, b) else {
            return Self::default();
        };

        let cell_vs_chemical = |x: &NormalizationResult, y: &NormalizationResult| {
            x.has_type_containing("Cell") && y.has_type_containing("Chemical")
        };

        Self {
            same_clique: a.preferred_id() == b.preferred_id(),
            category_mismatch: cell_vs_chemical(a, b) || cell_vs_chemical(b, a),
        }
    }
}
