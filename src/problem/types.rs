//! Core trait definition for benchmark problems.
//!
//! [`Problem`] is the contract between the generic evaluation machinery and
//! domain-specific content logic: one derived-feature extractor (`info`) plus
//! three scoring functions over its output.

use crate::error::Error;
use rand::Rng;

/// Defines a benchmark problem.
///
/// A problem binds a content space, a control space, and the three
/// evaluation criteria (quality, diversity, and controllability). Implementors
/// keep no mutable state across evaluations: every method is a pure function
/// of its arguments (plus the explicitly passed generator for sampling).
///
/// # Info caching
///
/// [`info`](Problem::info) computes every derived feature the scoring
/// functions need, once per content. It must be deterministic and depend on
/// the content alone, so callers may cache and reuse its output freely.
///
/// # Thread Safety
///
/// `Problem` must be `Send + Sync` because the batch evaluator may score
/// items in parallel using rayon.
pub trait Problem: Send + Sync {
    /// The content (generated artifact) type.
    type Content: Clone + Send + Sync;

    /// The control (target parameter) type.
    type Control: Clone + Send + Sync;

    /// The cached derived-feature type produced by [`info`](Problem::info).
    type Info: Clone + Send + Sync;

    /// Samples valid content from the problem's content space.
    fn sample_content<R: Rng>(&self, rng: &mut R) -> Self::Content;

    /// Samples an achievable control target from the control space.
    fn sample_control<R: Rng>(&self, rng: &mut R) -> Self::Control;

    /// Computes the derived features of one content.
    ///
    /// Fails when the content does not fit the problem's content space
    /// (shape or range violation); the batch evaluator isolates such
    /// failures per item.
    fn info(&self, content: &Self::Content) -> Result<Self::Info, Error>;

    /// Scores how well the content meets the problem's quality criteria.
    ///
    /// Returns a value in `[0, 1]`; exactly 1.0 iff every quality predicate
    /// holds, with lower scores expressing closeness.
    fn quality(&self, info: &Self::Info) -> f64;

    /// Scores how different two contents are, in `[0, 1]`.
    ///
    /// Identical contents score 0. The population-level diversity statistic
    /// (mean over unordered pairs) is computed by
    /// [`evaluate`](crate::problem::evaluate).
    fn diversity(&self, a: &Self::Info, b: &Self::Info) -> f64;

    /// Scores how closely the content matches a control target, in `[0, 1]`.
    ///
    /// Returns 1.0 iff the measured property hits the target within the
    /// problem's tolerance, decreasing monotonically with distance.
    fn controllability(&self, info: &Self::Info, control: &Self::Control) -> f64;
}
