//! nninv-common — Shared errors, configuration, the outbound service client
//! and the CURIE link resolver used across all NN Investigator crates.

pub mod config;
pub mod error;
pub mod linkouts;
pub mod retry;
pub mod service;

// Re-export commonly used types
pub use config::Config;
pub use error::{InvestigatorError, Result};
pub use linkouts::resolve_link;
pub use retry::RetryConfig;
pub use service::ServiceClient;
