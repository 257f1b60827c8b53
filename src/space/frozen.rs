//! Frozen-tile content spaces.
//!
//! A [`FrozenArraySpace`] composes an [`ArraySpace`] with an immutable
//! freeze layer: a boolean mask plus the value each masked cell is pinned
//! to. The layer is computed exactly once, at construction, from one
//! [`FreezeOptions`] strategy, and every content-producing operation
//! re-applies it before returning. Chaining any number of samples and swaps
//! can therefore never disturb a frozen cell.

use super::array::{flat_index, ArraySpace, Content};
use super::value::Space;
use crate::error::Error;
use crate::random::create_rng_opt;
use rand::Rng;

/// How the freeze layer is derived at construction time.
///
/// Exactly one strategy applies per space; the enum makes conflicting
/// combinations unrepresentable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FreezeOptions<V> {
    /// Freeze each cell independently with the given probability.
    ///
    /// The frozen value of a masked cell is drawn once, under the same
    /// seeded stream, at construction.
    RandomProbability {
        /// Per-cell freeze probability in `[0, 1]`.
        probability: f64,
        /// Seed for reproducible layouts; `None` uses entropy.
        seed: Option<u64>,
    },

    /// Freeze exactly the listed coordinates, all at one value.
    Positions {
        /// The value pinned at every listed coordinate.
        value: V,
        /// Coordinates to freeze, in the space's shape arity.
        positions: Vec<Vec<usize>>,
    },

    /// Freeze every cell of a reference content whose value is in a set.
    ///
    /// The frozen value of each masked cell is the reference's value there.
    Reference {
        /// The value types that freeze in place.
        values: Vec<V>,
        /// Reference content matching the space's shape.
        content: Content<V>,
    },
}

/// An [`ArraySpace`] with a subset of cells pinned to fixed values.
///
/// The freeze layer is set once at construction and exposed read-only;
/// there is no mutator. `sample`, `restructure`, and `content_swap` all
/// guarantee that every produced content carries the frozen value at every
/// masked position.
#[derive(Debug, Clone)]
pub struct FrozenArraySpace<S: Space> {
    base: ArraySpace<S>,
    frozen: Vec<Option<S::Value>>,
}

impl<S: Space> FrozenArraySpace<S> {
    /// Builds a frozen space from a base space and one freezing strategy.
    ///
    /// All strategy validation happens here, before any content is
    /// produced: probabilities outside `[0, 1]`, out-of-bounds or
    /// wrong-arity coordinates, pin values outside the cell domain, and
    /// reference contents of the wrong shape are construction failures.
    pub fn new(base: ArraySpace<S>, options: FreezeOptions<S::Value>) -> Result<Self, Error> {
        let mut frozen = vec![None; base.len()];
        match options {
            FreezeOptions::RandomProbability { probability, seed } => {
                if !(0.0..=1.0).contains(&probability) {
                    return Err(Error::FreezeConfig(format!(
                        "freeze probability {probability} outside [0, 1]"
                    )));
                }
                let mut rng = create_rng_opt(seed);
                let reference = base.sample(&mut rng);
                for (slot, value) in frozen.iter_mut().zip(reference.data()) {
                    if rng.random_bool(probability) {
                        *slot = Some(value.clone());
                    }
                }
            }
            FreezeOptions::Positions { value, positions } => {
                if !base.cell().contains(&value) {
                    return Err(Error::ValueOutOfDomain {
                        value: format!("{value:?}"),
                        domain: format!("{:?}", base.bounds()),
                    });
                }
                for coordinate in positions {
                    let index = flat_index(base.shape(), &coordinate).ok_or_else(|| {
                        Error::InvalidCoordinate {
                            coordinate: coordinate.clone(),
                            shape: base.shape().to_vec(),
                        }
                    })?;
                    frozen[index] = Some(value.clone());
                }
            }
            FreezeOptions::Reference { values, content } => {
                base.validate(&content)?;
                for (slot, value) in frozen.iter_mut().zip(content.data()) {
                    if values.contains(value) {
                        *slot = Some(value.clone());
                    }
                }
            }
        }
        Ok(Self { base, frozen })
    }

    /// Wraps a base space with an empty freeze layer.
    ///
    /// Behaves exactly like the base space; used where freezing is an
    /// optional configuration.
    pub fn passthrough(base: ArraySpace<S>) -> Self {
        let frozen = vec![None; base.len()];
        Self { base, frozen }
    }

    /// The wrapped base space.
    pub fn base(&self) -> &ArraySpace<S> {
        &self.base
    }

    /// The dimension sizes, outermost first.
    pub fn shape(&self) -> &[usize] {
        self.base.shape()
    }

    /// Total cell count.
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Whether the space has zero cells.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Inclusive `(min, max)` bounds of every cell.
    pub fn bounds(&self) -> (S::Value, S::Value) {
        self.base.bounds()
    }

    /// The freeze mask in row-major order, for inspection and rendering.
    pub fn mask(&self) -> Vec<bool> {
        self.frozen.iter().map(Option::is_some).collect()
    }

    /// Whether the cell at `flat` index is frozen.
    pub fn is_frozen(&self, flat: usize) -> bool {
        self.frozen.get(flat).is_some_and(Option::is_some)
    }

    /// The pinned value at `flat` index, or `None` when not frozen.
    pub fn frozen_value(&self, flat: usize) -> Option<&S::Value> {
        self.frozen.get(flat).and_then(Option::as_ref)
    }

    /// Number of frozen cells.
    pub fn frozen_count(&self) -> usize {
        self.frozen.iter().filter(|slot| slot.is_some()).count()
    }

    /// Overwrites every masked position with its frozen value.
    fn overlay(&self, content: &mut Content<S::Value>) {
        for (slot, pinned) in content.data_mut().iter_mut().zip(&self.frozen) {
            if let Some(value) = pinned {
                *slot = value.clone();
            }
        }
    }

    /// Samples content with frozen cells pinned.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Content<S::Value> {
        let mut content = self.base.sample(rng);
        self.overlay(&mut content);
        content
    }

    /// Samples fresh content directly in flat row-major form.
    pub fn sample_flat<R: Rng>(&self, rng: &mut R) -> Vec<S::Value> {
        self.sample(rng).to_flat()
    }

    /// Decodes a flat array, repairing out-of-range values and re-pinning
    /// frozen cells.
    pub fn restructure(&self, flat: Vec<S::Value>) -> Result<Content<S::Value>, Error> {
        let mut content = self.base.restructure(flat)?;
        self.overlay(&mut content);
        Ok(content)
    }

    /// Recombines two contents, leaving frozen cells untouched.
    ///
    /// Frozen positions are excluded from the swap candidate set entirely,
    /// so `max_swaps` budgets only mutable positions. The freeze layer is
    /// re-applied to the result, which also repairs parents that violated
    /// it.
    pub fn content_swap<R: Rng>(
        &self,
        a: &Content<S::Value>,
        b: &Content<S::Value>,
        probability: f64,
        max_swaps: Option<usize>,
        rng: &mut R,
    ) -> Result<Content<S::Value>, Error> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::InvalidProbability(probability));
        }
        self.base.validate(a)?;
        self.base.validate(b)?;

        let mut content = a.clone();
        let mut swapped = 0usize;
        for ((slot, source), pinned) in content.data_mut().iter_mut().zip(b.data()).zip(&self.frozen)
        {
            if pinned.is_some() {
                continue;
            }
            if max_swaps.is_some_and(|cap| swapped >= cap) {
                break;
            }
            if rng.random_bool(probability) && slot != source {
                *slot = source.clone();
                swapped += 1;
            }
        }
        self.overlay(&mut content);
        Ok(content)
    }
}

// ============================================================================
// Tests
// ============================================================================
