use std::collections::HashSet;
use std::time::Duration;

use reqwest::{Client, ClientBuilder, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ServicesConfig;
use crate::error::{InvestigatorError, Result};
use crate::retry::RetryConfig;

/// HTTP client for the external normalization services.
///
/// Requests are only sent to hosts on the allowlist, which is seeded from
/// the configured service base URLs. Every request carries the configured
/// timeout; transient failures are retried per [`RetryConfig`].
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: Client,
    allowlist: HashSet<String>,
    retry: RetryConfig,
}

impl ServiceClient {
    /// Creates a client with an empty allowlist.
    pub fn new(timeout: Duration, retry: RetryConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("nn-investigator/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, allowlist: HashSet::new(), retry })
    }

    /// Creates a client allowed to reach the NodeNorm and NameRes hosts
    /// named in `config`.
    pub fn from_config(config: &ServicesConfig) -> Result<Self> {
        let mut client = Self::new(
            Duration::from_secs(config.timeout_secs),
            config.retry.clone(),
        )?;
        client.allow_url(&config.nodenorm_url)?;
        client.allow_url(&config.nameres_url)?;
        Ok(client)
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Appends the host of `url` to the allowlist.
    pub fn allow_url(&mut self, url: &str) -> Result<()> {
        let parsed = Url::parse(url)?;
        let host = parsed.host_str().ok_or_else(|| {
            InvestigatorError::Config(format!("service URL has no host: {url}"))
        })?;
        self.allow_domain(host);
        Ok(())
    }

    /// Validates if a URL is permitted under the current allowlist.
    pub fn is_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else { return false };
        let Some(host) = parsed.host_str() else { return false };
        self.allowlist
            .iter()
            .any(|allowed| host == allowed || host.ends_with(&format!(".{allowed}")))
    }

    /// Starts a POST request to an allowed URL.
    pub fn post(&self, url: &str) -> Result<RequestBuilder> {
        if !self.is_allowed(url) {
            return Err(InvestigatorError::Security(format!(
                "host not in service allowlist for URL {url}"
            )));
        }
        Ok(self.client.post(url))
    }

    /// POST `body` as JSON (when given) with `query` parameters and decode
    /// the JSON response, retrying transient failures.
    ///
    /// Non-2xx responses become [`InvestigatorError::Status`] tagged with
    /// `service`.
    pub async fn post_json<B, T>(
        &self,
        service: &str,
        url: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut attempt = 1;
        loop {
            match self.post_json_once(service, url, query, body).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < self.retry.max_attempts => {
                    let delay = self.retry.delay_for(attempt);
                    warn!(service, attempt, ?delay, error = %e, "transient service failure, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn post_json_once<B, T>(
        &self,
        service: &str,
        url: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.post(url)?;
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request.send().await?;
        let status = resp.status();
        debug!(service, url, status = status.as_u16(), "service responded");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(InvestigatorError::Status {
                service: service.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ServiceClient {
        let mut c = ServiceClient::new(Duration::from_secs(5), RetryConfig::none()).unwrap();
        c.allow_domain("renci.org");
        c
    }

    #[test]
    fn test_subdomains_of_allowed_host_pass() {
        let c = client();
        assert!(c.is_allowed("https://nodenormalization-sri.renci.org/get_normalized_nodes"));
        assert!(c.is_allowed("https://renci.org/"));
    }

    #[test]
    fn test_other_hosts_are_rejected() {
        let c = client();
        assert!(!c.is_allowed("https://example.com/"));
        assert!(!c.is_allowed("https://evilrenci.org/"));
        assert!(!c.is_allowed("not a url"));
        assert!(matches!(
            c.post("https://example.com/x"),
            Err(InvestigatorError::Security(_))
        ));
    }

    #[test]
    fn test_from_config_allows_service_hosts() {
        let c = ServiceClient::from_config(&ServicesConfig::default()).unwrap();
        assert!(c.is_allowed("https://nodenormalization-sri.renci.org/get_normalized_nodes"));
        assert!(c.is_allowed("https://name-resolution-sri.renci.org/lookup"));
    }

    #[test]
    fn test_allow_url_without_host_is_config_error() {
        let mut c = client();
        assert!(matches!(
            c.allow_url("mailto:someone"),
            Err(InvestigatorError::Config(_))
        ));
    }
}
