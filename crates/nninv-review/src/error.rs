use nninv_common::InvestigatorError;
use nninv_db::DbError;
use thiserror::Error;

pub const EVALUATION_REQUIRED: &str = "Please select an evaluation";
pub const PAIR_FIELDS_REQUIRED: &str = "Entity name, curie_a, and curie_b are required";

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Pair {0} not found")]
    NotFound(i64),

    /// User input rejected before anything was written.
    #[error("{0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(#[from] DbError),

    #[error("Service error: {0}")]
    Service(#[from] InvestigatorError),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
