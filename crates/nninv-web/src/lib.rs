//! nninv-web — Web UI for reviewing entity pairs.
//! Provides:
//!   - Pair listing with evaluation progress
//!   - Investigation page comparing both CURIEs' normalization
//!   - Evaluation capture, add and delete forms
//!   - Markdown export and a JSON name lookup

pub mod error;
pub mod flash;
pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber; `RUST_LOG` wins over the built-in filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nninv=debug,nninv_web=debug,nninv_review=debug,info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
