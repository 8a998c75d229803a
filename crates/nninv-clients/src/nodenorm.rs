//! Node Normalization (NodeNorm) API client.
//!
//! Endpoint: https://nodenormalization-sri.renci.org/get_normalized_nodes

use async_trait::async_trait;
use nninv_common::config::ServicesConfig;
use nninv_common::{Result, ServiceClient};
use tracing::{debug, instrument};

use crate::models::{Identifier, NormalizeOptions, NormalizeRequest, NormalizedNodes};

const SERVICE: &str = "nodenorm";

/// Common interface for anything that can normalize CURIEs.
#[async_trait]
pub trait Normalizer: Send + Sync {
    /// Normalize `curies`, returning one entry per input CURIE.
    async fn normalize(
        &self,
        curies: &[String],
        options: &NormalizeOptions,
    ) -> Result<NormalizedNodes>;

    /// Preferred identifier of `curie`'s clique, if NodeNorm knows it.
    async fn preferred_id(&self, curie: &str, options: &NormalizeOptions) -> Result<Option<String>> {
        let mut nodes = self.normalize(&[curie.to_string()], options).await?;
        Ok(nodes
            .remove(curie)
            .flatten()
            .map(|node| node.id.identifier))
    }

    /// Every identifier in `curie`'s clique; empty if unknown.
    async fn equivalent_ids(&self, curie: &str, options: &NormalizeOptions) -> Result<Vec<Identifier>> {
        let mut nodes = self.normalize(&[curie.to_string()], options).await?;
        Ok(nodes
            .remove(curie)
            .flatten()
            .map(|node| node.equivalent_identifiers)
            .unwrap_or_default())
    }

    /// Biolink types of `curie`, most specific first; empty if unknown.
    async fn types(&self, curie: &str, options: &NormalizeOptions) -> Result<Vec<String>> {
        let mut nodes = self.normalize(&[curie.to_string()], options).await?;
        Ok(nodes
            .remove(curie)
            .flatten()
            .map(|node| node.types)
            .unwrap_or_default())
    }
}

pub struct NodeNormClient {
    client: ServiceClient,
    endpoint: String,
    max_batch_size: usize,
}

impl NodeNormClient {
    /// `base_url` is the service root, e.g. `https://nodenormalization-sri.renci.org`.
    pub fn new(client: ServiceClient, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/get_normalized_nodes", base_url.trim_end_matches('/')),
            max_batch_size: ServicesConfig::default().max_batch_size,
        }
    }

    pub fn from_config(client: ServiceClient, config: &ServicesConfig) -> Self {
        Self::new(client, &config.nodenorm_url).with_max_batch_size(config.max_batch_size)
    }

    /// Largest number of CURIEs per request; larger inputs are split.
    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size.max(1);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Normalizer for NodeNormClient {
    #[instrument(skip(self, curies), fields(n = curies.len()))]
    async fn normalize(
        &self,
        curies: &[String],
        options: &NormalizeOptions,
    ) -> Result<NormalizedNodes> {
        let mut nodes = NormalizedNodes::with_capacity(curies.len());

        for batch in curies.chunks(self.max_batch_size) {
            let request = NormalizeRequest {
                curies: batch,
                conflate: options.conflate,
                drug_chemical_conflate: options.drug_chemical_conflate,
                description: options.description,
            };
            let resp: NormalizedNodes = self
                .client
                .post_json(SERVICE, &self.endpoint, &[], Some(&request))
                .await?;
            debug!(requested = batch.len(), returned = resp.len(), "NodeNorm batch normalized");
            nodes.extend(resp);
        }

        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nninv_common::RetryConfig;
    use std::time::Duration;

    fn client() -> ServiceClient {
        ServiceClient::new(Duration::from_secs(1), RetryConfig::none()).unwrap()
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let c = NodeNormClient::new(client(), "https://nodenormalization-sri.renci.org/");
        assert_eq!(c.endpoint(), "https://nodenormalization-sri.renci.org/get_normalized_nodes");
    }

    #[test]
    fn test_zero_batch_size_is_clamped() {
        let c = NodeNormClient::new(client(), "http://localhost").with_max_batch_size(0);
        assert_eq!(c.max_batch_size, 1);
    }

    #[tokio::test]
    async fn test_empty_input_sends_nothing() {
        // No host is allowlisted, so any request would fail.
        let c = NodeNormClient::new(client(), "https://nodenormalization-sri.renci.org");
        let nodes = c.normalize(&[], &NormalizeOptions::default()).await.unwrap();
        assert!(nodes.is_empty());
    }
}
