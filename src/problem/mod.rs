//! The uniform problem contract and batch evaluation machinery.
//!
//! Every game-content domain plugs into the benchmark by implementing
//! [`Problem`]: a derived-feature extractor (`info`) plus three scoring
//! functions (quality, diversity, controllability). The batch entry point
//! [`evaluate`] handles control broadcasting, per-item error isolation, and
//! the population-level diversity reduction; [`Registry`] publishes named
//! variants.

mod evaluate;
mod registry;
mod types;

pub use evaluate::{evaluate, EvalDetails, EvalReport};
pub use registry::Registry;
pub use types::Problem;
