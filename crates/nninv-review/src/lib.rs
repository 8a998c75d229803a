//! nninv-review — The review loop over stored entity pairs: investigation
//! of both CURIEs against NodeNorm, evaluation capture, navigation and
//! markdown export.

pub mod annotate;
pub mod error;
pub mod export;
pub mod navigation;
pub mod workflow;

pub use annotate::{AnnotatedCurie, CliqueHints, NormalizationStatus};
pub use error::{ReviewError, Result};
pub use export::export_markdown;
pub use navigation::{neighbors, Neighbors};
pub use workflow::{EvaluationSubmission, Investigation, NewPairForm, ReviewWorkflow};
