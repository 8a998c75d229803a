//! Name Resolution (NameRes) API client.
//!
//! Endpoints under https://name-resolution-sri.renci.org:
//! `/lookup`, `/bulk_lookup` and `/synonyms`.

use std::collections::HashMap;

use nninv_common::config::ServicesConfig;
use nninv_common::{Result, ServiceClient};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::models::{LookupQuery, LookupResult, SynonymRecord};

const SERVICE: &str = "nameres";

#[derive(Serialize)]
struct SynonymsRequest<'a> {
    preferred_curies: &'a [String],
}

pub struct NameResClient {
    client: ServiceClient,
    base_url: String,
}

impl NameResClient {
    pub fn new(client: ServiceClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(client: ServiceClient, config: &ServicesConfig) -> Self {
        Self::new(client, &config.nameres_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Synonyms for each preferred CURIE, keyed by CURIE.
    #[instrument(skip(self))]
    pub async fn synonyms(&self, preferred_curies: &[String]) -> Result<HashMap<String, SynonymRecord>> {
        let body = SynonymsRequest { preferred_curies };
        let resp: HashMap<String, SynonymRecord> = self
            .client
            .post_json(SERVICE, &self.url("synonyms"), &[], Some(&body))
            .await?;
        debug!(count = resp.len(), "NameRes synonyms returned");
        Ok(resp)
    }

    /// Look up CURIEs by name, in the service's ranking order.
    #[instrument(skip(self), fields(string = %query.string))]
    pub async fn lookup(&self, query: &LookupQuery) -> Result<Vec<LookupResult>> {
        let params = query.query_params();
        let filters = query.filter_body();
        let results: Vec<LookupResult> = self
            .client
            .post_json(SERVICE, &self.url("lookup"), &params, filters.as_ref())
            .await?;
        debug!(count = results.len(), "NameRes lookup returned results");
        Ok(results)
    }

    /// Run several lookups in one request, keyed by caller-chosen ids.
    #[instrument(skip(self, queries), fields(n = queries.len()))]
    pub async fn bulk_lookup(
        &self,
        queries: &HashMap<String, LookupQuery>,
    ) -> Result<HashMap<String, Vec<LookupResult>>> {
        self.client
            .post_json(SERVICE, &self.url("bulk_lookup"), &[], Some(queries))
            .await
    }
}
