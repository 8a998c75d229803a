//! Request and response models for the normalization services.

use std::collections::HashMap;

use nninv_common::config::NormalizationConfig;
use serde::{Deserialize, Serialize};

// ── NodeNorm ──────────────────────────────────────────────────────────────

/// An identifier with its optional label, as NodeNorm reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Only present when descriptions were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// NodeNorm's answer for one input CURIE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationResult {
    /// Preferred identifier of the clique.
    pub id: Identifier,
    #[serde(default)]
    pub equivalent_identifiers: Vec<Identifier>,
    /// Biolink types, most specific first.
    #[serde(default, rename = "type")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information_content: Option<f64>,
    /// Clique description, only when descriptions were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NormalizationResult {
    pub fn preferred_id(&self) -> &str {
        &self.id.identifier
    }

    pub fn preferred_label(&self) -> Option<&str> {
        self.id.label.as_deref()
    }

    /// Whether any type tag contains `needle` (e.g. `"Cell"` matches
    /// `biolink:CellularComponent`).
    pub fn has_type_containing(&self, needle: &str) -> bool {
        self.types.iter().any(|t| t.contains(needle))
    }
}

/// Input CURIE -> result; `None` for CURIEs NodeNorm does not know.
pub type NormalizedNodes = HashMap<String, Option<NormalizationResult>>;

/// Flags passed through to NodeNorm unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Gene/protein conflation.
    pub conflate: bool,
    pub drug_chemical_conflate: bool,
    pub description: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self { conflate: true, drug_chemical_conflate: true, description: false }
    }
}

impl From<&NormalizationConfig> for NormalizeOptions {
    fn from(cfg: &NormalizationConfig) -> Self {
        Self {
            conflate: cfg.conflate,
            drug_chemical_conflate: cfg.drug_chemical_conflate,
            description: cfg.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct NormalizeRequest<'a> {
    pub curies: &'a [String],
    pub conflate: bool,
    pub drug_chemical_conflate: bool,
    pub description: bool,
}

// ── Name Resolution ───────────────────────────────────────────────────────

/// Synonyms for one preferred CURIE.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynonymRecord {
    #[serde(default)]
    pub curie: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub preferred_name: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One match from a name lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub curie: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub taxa: Vec<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Parameters of a name lookup. Pagination is passed through untouched;
/// the service may return fewer than `limit` matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupQuery {
    pub string: String,
    #[serde(default)]
    pub autocomplete: bool,
    #[serde(default)]
    pub highlighting: bool,
    #[serde(default)]
    pub offset: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biolink_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_prefixes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_taxa: Option<Vec<String>>,
}

fn default_limit() -> u32 { 10 }

impl LookupQuery {
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
            autocomplete: false,
            highlighting: false,
            offset: 0,
            limit: default_limit(),
            biolink_type: None,
            only_prefixes: None,
            only_taxa: None,
        }
    }

    pub fn autocomplete(mut self, on: bool) -> Self {
        self.autocomplete = on;
        self
    }

    pub fn page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }

    pub fn biolink_type(mut self, biolink_type: impl Into<String>) -> Self {
        self.biolink_type = Some(biolink_type.into());
        self
    }

    pub fn only_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.only_prefixes = Some(prefixes);
        self
    }

    pub fn only_taxa(mut self, taxa: Vec<String>) -> Self {
        self.only_taxa = Some(taxa);
        self
    }

    /// URL query parameters; booleans as lowercase `true`/`false`.
    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("string", self.string.clone()),
            ("autocomplete", self.autocomplete.to_string()),
            ("highlighting", self.highlighting.to_string()),
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(biolink_type) = self.biolink_type.as_ref().filter(|t| !t.is_empty()) {
            params.push(("biolink_type", biolink_type.clone()));
        }
        params
    }

    /// JSON body for the prefix/taxon filters; `None` when neither is set.
    pub(crate) fn filter_body(&self) -> Option<LookupFilters> {
        let only_prefixes = self.only_prefixes.clone().filter(|p| !p.is_empty());
        let only_taxa = self.only_taxa.clone().filter(|t| !t.is_empty());
        if only_prefixes.is_none() && only_taxa.is_none() {
            return None;
        }
        Some(LookupFilters { only_prefixes, only_taxa })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LookupFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_prefixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_taxa: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_nodenorm_response() {
        let body = serde_json::json!({
            "MESH:D014867": {
                "id": { "identifier": "CHEBI:15377", "label": "Water" },
                "equivalent_identifiers": [
                    { "identifier": "CHEBI:15377", "label": "water" },
                    { "identifier": "MESH:D014867" }
                ],
                "type": ["biolink:SmallMolecule", "biolink:ChemicalEntity"],
                "information_content": 47.5
            },
            "FAKE:0": null
        });
        let nodes: NormalizedNodes = serde_json::from_value(body).unwrap();
        let water = nodes["MESH:D014867"].as_ref().unwrap();
        assert_eq!(water.preferred_id(), "CHEBI:15377");
        assert_eq!(water.preferred_label(), Some("Water"));
        assert_eq!(water.equivalent_identifiers[1].label, None);
        assert_eq!(water.types[0], "biolink:SmallMolecule");
        assert!(water.has_type_containing("Chemical"));
        assert!(!water.has_type_containing("Cell"));
        assert!(nodes["FAKE:0"].is_none());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let result: NormalizationResult =
            serde_json::from_value(serde_json::json!({ "id": { "identifier": "X:1" } })).unwrap();
        assert!(result.equivalent_identifiers.is_empty());
        assert!(result.types.is_empty());
    }

    #[test]
    fn test_query_params_lowercase_booleans() {
        let q = LookupQuery::new("water").autocomplete(true).page(20, 5).biolink_type("SmallMolecule");
        assert_eq!(
            q.query_params(),
            vec![
                ("string", "water".to_string()),
                ("autocomplete", "true".to_string()),
                ("highlighting", "false".to_string()),
                ("offset", "20".to_string()),
                ("limit", "5".to_string()),
                ("biolink_type", "SmallMolecule".to_string()),
            ]
        );
    }

    #[test]
    fn test_filter_body_only_with_filters() {
        assert!(LookupQuery::new("x").filter_body().is_none());
        assert!(LookupQuery::new("x").only_prefixes(vec![]).filter_body().is_none());
        let body = LookupQuery::new("x").only_taxa(vec!["NCBITaxon:9606".into()]).filter_body().unwrap();
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "only_taxa": ["NCBITaxon:9606"] })
        );
    }

    #[test]
    fn test_synonym_record_keeps_unknown_fields() {
        let record: SynonymRecord = serde_json::from_value(serde_json::json!({
            "curie": "CHEBI:15377",
            "names": ["water", "H2O"],
            "preferred_name": "Water",
            "clique_identifier_count": 12
        }))
        .unwrap();
        assert_eq!(record.names, vec!["water", "H2O"]);
        assert_eq!(record.extra["clique_identifier_count"], 12);
    }
}
