//! NN Investigator Database Layer
//!
//! Persists entity pairs awaiting review in an embedded SQLite database.
//! Callers program against the [`PairStore`] trait; the SQLite-backed
//! [`PairRepository`] is used in production and [`InMemoryPairStore`]
//! stands in for it in tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use nninv_db::{Database, NewPair, PairRepository, PairStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::open("./nn_investigator.db").await?;
//!     db.initialize().await?;
//!
//!     let pairs = PairRepository::new(std::sync::Arc::new(db));
//!     let id = pairs.create(&NewPair::new("bleomycin", "CHEBI:3139", "CHEBI:22907")).await?;
//!     println!("created pair {id}");
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
pub mod memory;
pub mod pairs;
pub mod schema;

pub use database::{Database, DatabaseStats};
pub use error::{DbError, Result};
pub use memory::InMemoryPairStore;
pub use pairs::{PairRepository, PairStore};
pub use schema::{EntityPair, Evaluation, NewPair, TABLE_ENTITY_PAIRS};
