use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvestigatorError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} returned HTTP {status}: {body}")]
    Status {
        service: String,
        status: u16,
        body: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Security error: {0}")]
    Security(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InvestigatorError {
    /// Whether a retry has a chance of succeeding: transport failures and
    /// 5xx answers are transient, everything else is not.
    pub fn is_transient(&self) -> bool {
        match self {
            InvestigatorError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            InvestigatorError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, InvestigatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_transient() {
        let err = InvestigatorError::Status {
            service: "nodenorm".to_string(),
            status: 503,
            body: String::new(),
        };
        assert!(err.is_transient());
    }

    #[test]
    fn test_client_errors_are_not_transient() {
        let err = InvestigatorError::Status {
            service: "nameres".to_string(),
            status: 422,
            body: "bad query".to_string(),
        };
        assert!(!err.is_transient());
        assert_eq!(err.to_string(), "nameres returned HTTP 422: bad query");
    }

    #[test]
    fn test_config_errors_are_not_transient() {
        assert!(!InvestigatorError::Config("missing".into()).is_transient());
    }
}
