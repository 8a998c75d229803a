//! nninv-clients — Clients for the Translator normalization services.
//!
//! - `NodeNormClient`: batch CURIE normalization (NodeNorm)
//! - `NameResClient`: name lookup and synonyms (Name Resolution)

pub mod models;
pub mod nameres;
pub mod nodenorm;

pub use models::{
    Identifier, LookupQuery, LookupResult, NormalizationResult, NormalizeOptions,
    NormalizedNodes, SynonymRecord,
};
pub use nameres::NameResClient;
pub use nodenorm::{NodeNormClient, Normalizer};
