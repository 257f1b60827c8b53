//! Batch evaluation over a population of contents.
//!
//! [`evaluate`] runs a whole batch through one [`Problem`]: per-item `info`,
//! `quality`, and (when controls are supplied) `controllability`, plus the
//! single population-level diversity scalar. Items are independent: a
//! failing item scores 0 with an error note and the batch continues.

use super::types::Problem;
use crate::error::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Raw per-item score arrays keyed by criterion, plus error notes.
#[derive(Debug, Clone, Default)]
pub struct EvalDetails {
    /// Per-item quality scores, aligned with the input batch.
    pub quality: Vec<f64>,
    /// Per-item controllability scores; empty when no controls were given.
    pub controllability: Vec<f64>,
    /// Per-item error note for items whose `info` failed, `None` otherwise.
    pub errors: Vec<Option<String>>,
}

/// Result of evaluating a batch of contents against one problem.
#[derive(Debug, Clone)]
pub struct EvalReport<I> {
    /// Per-item quality in `[0, 1]`.
    pub quality: Vec<f64>,
    /// Single population-level diversity scalar in `[0, 1]`.
    ///
    /// Mean pairwise diversity over items with valid infos; 0.0 when fewer
    /// than two items are valid. Invariant to batch ordering.
    pub diversity: f64,
    /// Per-item controllability, present iff controls were supplied.
    pub controllability: Option<Vec<f64>>,
    /// Raw score arrays and per-item error notes.
    pub details: EvalDetails,
    /// Cached derived features per item; `None` where `info` failed.
    pub infos: Vec<Option<I>>,
}

/// How controls map onto the batch.
enum ControlPlan<'a, C> {
    Skip,
    Broadcast(&'a C),
    PerItem(&'a [C]),
}

impl<'a, C> ControlPlan<'a, C> {
    fn resolve(controls: Option<&'a [C]>, contents: usize) -> Result<Self, Error> {
        match controls {
            None => Ok(Self::Skip),
            Some([]) => Ok(Self::Skip),
            Some([single]) => Ok(Self::Broadcast(single)),
            Some(many) if many.len() == contents => Ok(Self::PerItem(many)),
            Some(many) => Err(Error::ControlCount {
                controls: many.len(),
                contents,
            }),
        }
    }

    fn get(&self, item: usize) -> Option<&C> {
        match self {
            Self::Skip => None,
            Self::Broadcast(control) => Some(control),
            Self::PerItem(many) => Some(&many[item]),
        }
    }
}

/// Evaluates a batch of contents, optionally against control targets.
///
/// `controls` accepts `None` (skip controllability), a single element
/// (broadcast to every item), or exactly one per content; any other length
/// fails with [`Error::ControlCount`] before anything is scored.
///
/// Per-item failures (shape or range violations surfacing from
/// [`Problem::info`]) do not abort the batch: the item scores 0.0 on every
/// criterion, its info slot is `None`, and the error text lands in
/// `details.errors`. Diversity is computed once over all valid items, after
/// every item's info is resolved.
pub fn evaluate<P: Problem>(
    problem: &P,
    contents: &[P::Content],
    controls: Option<&[P::Control]>,
) -> Result<EvalReport<P::Info>, Error> {
    let plan = ControlPlan::resolve(controls, contents.len())?;
    let with_controls = !matches!(plan, ControlPlan::Skip);

    let infos = compute_infos(problem, contents);

    let mut quality = Vec::with_capacity(contents.len());
    let mut controllability = Vec::with_capacity(contents.len());
    let mut errors = Vec::with_capacity(contents.len());
    for (item, info) in infos.iter().enumerate() {
        match info {
            Ok(info) => {
                quality.push(problem.quality(info));
                if let Some(control) = plan.get(item) {
                    controllability.push(problem.controllability(info, control));
                }
                errors.push(None);
            }
            Err(err) => {
                log::warn!("batch item {item} failed evaluation: {err}");
                quality.push(0.0);
                if with_controls {
                    controllability.push(0.0);
                }
                errors.push(Some(err.to_string()));
            }
        }
    }

    let valid: Vec<&P::Info> = infos.iter().filter_map(|info| info.as_ref().ok()).collect();
    let diversity = mean_pairwise_diversity(problem, &valid);

    let details = EvalDetails {
        quality: quality.clone(),
        controllability: controllability.clone(),
        errors,
    };
    Ok(EvalReport {
        quality,
        diversity,
        controllability: with_controls.then_some(controllability),
        details,
        infos: infos.into_iter().map(Result::ok).collect(),
    })
}

#[cfg(not(feature = "parallel"))]
fn compute_infos<P: Problem>(
    problem: &P,
    contents: &[P::Content],
) -> Vec<Result<P::Info, Error>> {
    contents.iter().map(|content| problem.info(content)).collect()
}

#[cfg(feature = "parallel")]
fn compute_infos<P: Problem>(
    problem: &P,
    contents: &[P::Content],
) -> Vec<Result<P::Info, Error>> {
    contents
        .par_iter()
        .map(|content| problem.info(content))
        .collect()
}

/// Mean pairwise diversity over unordered pairs; 0.0 below two items.
#[cfg(not(feature = "parallel"))]
fn mean_pairwise_diversity<P: Problem>(problem: &P, infos: &[&P::Info]) -> f64 {
    let n = infos.len();
    if n < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            total += problem.diversity(infos[i], infos[j]);
        }
    }
    total / (n * (n - 1) / 2) as f64
}

/// Mean pairwise diversity, sharding pairs across threads.
#[cfg(feature = "parallel")]
fn mean_pairwise_diversity<P: Problem>(problem: &P, infos: &[&P::Info]) -> f64 {
    let n = infos.len();
    if n < 2 {
        return 0.0;
    }
    let total: f64 = (0..n)
        .into_par_iter()
        .map(|i| {
            ((i + 1)..n)
                .map(|j| problem.diversity(infos[i], infos[j]))
                .sum::<f64>()
        })
        .sum();
    total / (n * (n - 1) / 2) as f64
}

// ============================================================================
// Tests
// ============================================================================
