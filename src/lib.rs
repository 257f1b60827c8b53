//! Benchmark framework for procedurally generated game content.
//!
//! Evaluates generated content against three criteria (**quality**,
//! **diversity**, and **controllability**) behind a uniform problem
//! contract, so arbitrary generators can be compared on equal footing.
//!
//! # Architecture
//!
//! - [`space`]: content spaces: legal shape and per-cell range, uniform
//!   sampling, a flat encode/decode pair, and the `content_swap`
//!   recombination primitive. [`space::FrozenArraySpace`] pins a subset of
//!   cells at construction and enforces that pin through every subsequent
//!   operation.
//! - [`problem`]: the [`Problem`](problem::Problem) trait (derived-feature
//!   extraction plus the three scoring functions), the batch
//!   [`evaluate`](problem::evaluate) entry point, and the named-variant
//!   [`Registry`](problem::Registry).
//! - [`probs`]: built-in problems. The door-maze connectivity family is the
//!   canonical instantiation: deterministic border-door placement,
//!   breadth-first path measurement, region counting, and Hamming-distance
//!   diversity.
//!
//! # Determinism
//!
//! Every random draw (sampling, swaps, probabilistic freezing, door
//! placement) flows through an explicitly seeded generator from
//! [`random::create_rng`]; identical seeds reproduce identical results on
//! any platform.
//!
//! # Example
//!
//! ```
//! use pcg_bench::probs::default_registry;
//! use pcg_bench::problem::{evaluate, Problem};
//! use pcg_bench::random::create_rng;
//!
//! let registry = default_registry();
//! let problem = registry.make("doormaze-v0").unwrap();
//!
//! let mut rng = create_rng(42);
//! let batch: Vec<_> = (0..8).map(|_| problem.sample_content(&mut rng)).collect();
//! let controls = [problem.target()];
//!
//! let report = evaluate(&problem, &batch, Some(&controls)).unwrap();
//! assert_eq!(report.quality.len(), 8);
//! assert!((0.0..=1.0).contains(&report.diversity));
//! ```

pub mod error;
pub mod problem;
pub mod probs;
pub mod random;
pub mod reward;
pub mod space;

pub use error::Error;
