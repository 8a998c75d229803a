//! JSON name lookup used by the add-pair form.

use axum::extract::{Query, State};
use axum::Json;
use nninv_clients::{LookupQuery, LookupResult};
use nninv_review::ReviewError;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    #[serde(default)]
    pub string: String,
    #[serde(default)]
    pub autocomplete: bool,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub biolink_type: Option<String>,
    /// Comma-separated, e.g. `CHEBI,MESH`.
    pub only_prefixes: Option<String>,
    /// Comma-separated NCBITaxon CURIEs.
    pub only_taxa: Option<String>,
}

fn split_list(raw: Option<&str>) -> Option<Vec<String>> {
    let items: Vec<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    (!items.is_empty()).then_some(items)
}

impl LookupParams {
    fn into_query(self) -> Result<LookupQuery, ApiError> {
        let string = self.string.trim();
        if string.is_empty() {
            return Err(ApiError::BadRequest("string is required".to_string()));
        }

        let mut query = LookupQuery::new(string).autocomplete(self.autocomplete);
        let limit = self.limit.unwrap_or(query.limit);
        query = query.page(self.offset.unwrap_or(0), limit);
        if let Some(t) = self.biolink_type.filter(|t| !t.trim().is_empty()) {
            query = query.biolink_type(t);
        }
        if let Some(prefixes) = split_list(self.only_prefixes.as_deref()) {
            query = query.only_prefixes(prefixes);
        }
        if let Some(taxa) = split_list(self.only_taxa.as_deref()) {
            query = query.only_taxa(taxa);
        }
        Ok(query)
    }
}

pub async fn api_lookup(
    State(state): State<SharedState>,
    Query(params): Query<LookupParams>,
) -> Result<Json<Vec<LookupResult>>, ApiError> {
    let query = params.into_query()?;
    let results = state
        .nameres
        .lookup(&query)
        .await
        .map_err(ReviewError::Service)?;
    Ok(Json(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(string: &str) -> LookupParams {
        LookupParams {
            string: string.to_string(),
            autocomplete: false,
            offset: None,
            limit: None,
            biolink_type: None,
            only_prefixes: None,
            only_taxa: None,
        }
    }

    #[test]
    fn test_blank_string_rejected() {
        assert!(matches!(params("  ").into_query(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_lists_split_on_commas() {
        let mut p = params("water");
        p.only_prefixes = Some("CHEBI, MESH,".to_string());
        p.only_taxa = Some(" ".to_string());
        let q = p.into_query().unwrap();
        assert_eq!(q.only_prefixes, Some(vec!["CHEBI".to_string(), "MESH".to_string()]));
        assert_eq!(q.only_taxa, None);
        assert_eq!(q.limit, 10);
    }
}
