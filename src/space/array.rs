//! N-dimensional content and the array content space.
//!
//! [`Content`] is one concrete generated artifact: an owned, shape-tagged,
//! row-major value array. [`ArraySpace`] defines the legal shape and per-cell
//! domain of such artifacts and provides the three primitives every generator
//! builds on: uniform sampling, a flat encode/decode pair, and the
//! [`content_swap`](ArraySpace::content_swap) recombination operator.
//!
//! All operations are value-semantic: spaces never mutate content handed in
//! by a caller, they return fresh arrays.

use super::value::Space;
use crate::error::Error;
use rand::Rng;

/// One concrete generated artifact belonging to an [`ArraySpace`].
///
/// Stores its shape alongside row-major data. Equality is structural, so
/// contents can be compared directly in tests and archives.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Content<V> {
    shape: Vec<usize>,
    data: Vec<V>,
}

impl<V: Clone> Content<V> {
    /// Builds content from a shape and row-major data.
    ///
    /// Fails with [`Error::FlatLength`] when `data` does not hold exactly
    /// one value per cell.
    pub fn new(shape: impl Into<Vec<usize>>, data: Vec<V>) -> Result<Self, Error> {
        let shape = shape.into();
        let cells = shape.iter().product::<usize>();
        if data.len() != cells {
            return Err(Error::FlatLength {
                expected: cells,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Builds content with every cell set to `value`.
    pub fn filled(shape: impl Into<Vec<usize>>, value: V) -> Self {
        let shape = shape.into();
        let cells = shape.iter().product::<usize>();
        Self {
            shape,
            data: vec![value; cells],
        }
    }

    /// The dimension sizes, outermost first.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total cell count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the content has zero cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of the data.
    pub fn data(&self) -> &[V] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [V] {
        &mut self.data
    }

    /// The flat (row-major) encoding of this content.
    pub fn to_flat(&self) -> Vec<V> {
        self.data.clone()
    }

    /// Converts a coordinate into its row-major flat index.
    ///
    /// Returns `None` for coordinates of the wrong arity or outside the
    /// shape.
    pub fn flat_index(&self, coordinate: &[usize]) -> Option<usize> {
        flat_index(&self.shape, coordinate)
    }

    /// The value at `coordinate`, or `None` when out of bounds.
    pub fn get(&self, coordinate: &[usize]) -> Option<&V> {
        self.flat_index(coordinate).map(|i| &self.data[i])
    }
}

/// Row-major flat index of `coordinate` within `shape`.
pub(crate) fn flat_index(shape: &[usize], coordinate: &[usize]) -> Option<usize> {
    if coordinate.len() != shape.len() {
        return None;
    }
    let mut index = 0usize;
    for (&c, &dim) in coordinate.iter().zip(shape.iter()) {
        if c >= dim {
            return None;
        }
        index = index * dim + c;
    }
    Some(index)
}

/// The legal shape and per-cell domain of generated content.
///
/// Shape is fixed for the lifetime of the space; every content it produces
/// has exactly this shape with every cell inside the scalar domain.
#[derive(Debug, Clone)]
pub struct ArraySpace<S: Space> {
    shape: Vec<usize>,
    cell: S,
}

impl<S: Space> ArraySpace<S> {
    /// Builds a space over `shape` with the given per-cell domain.
    pub fn new(shape: impl Into<Vec<usize>>, cell: S) -> Self {
        Self {
            shape: shape.into(),
            cell,
        }
    }

    /// The dimension sizes, outermost first.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total cell count.
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    /// Whether the space has zero cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The scalar domain shared by every cell.
    pub fn cell(&self) -> &S {
        &self.cell
    }

    /// Inclusive `(min, max)` bounds of every cell, for normalization.
    pub fn bounds(&self) -> (S::Value, S::Value) {
        self.cell.bounds()
    }

    /// Draws a value independently per cell.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Content<S::Value> {
        let data = (0..self.len()).map(|_| self.cell.sample(rng)).collect();
        Content {
            shape: self.shape.clone(),
            data,
        }
    }

    /// Samples fresh content directly in flat row-major form.
    pub fn sample_flat<R: Rng>(&self, rng: &mut R) -> Vec<S::Value> {
        (0..self.len()).map(|_| self.cell.sample(rng)).collect()
    }

    /// Decodes a flat array back into structured content.
    ///
    /// This is a repair operation, not a validator: out-of-range values are
    /// clamped to the nearest legal value. The only failure is a cell-count
    /// mismatch ([`Error::FlatLength`]).
    pub fn restructure(&self, flat: Vec<S::Value>) -> Result<Content<S::Value>, Error> {
        if flat.len() != self.len() {
            return Err(Error::FlatLength {
                expected: self.len(),
                actual: flat.len(),
            });
        }
        let data = flat.into_iter().map(|v| self.cell.repair(v)).collect();
        Ok(Content {
            shape: self.shape.clone(),
            data,
        })
    }

    /// Whether `content` has this space's shape with every cell in range.
    pub fn contains(&self, content: &Content<S::Value>) -> bool {
        self.validate(content).is_ok()
    }

    /// Checks shape and per-cell range, reporting the first violation.
    pub fn validate(&self, content: &Content<S::Value>) -> Result<(), Error> {
        if content.shape() != self.shape.as_slice() {
            return Err(Error::ShapeMismatch {
                expected: self.shape.clone(),
                actual: content.shape().to_vec(),
            });
        }
        for value in content.data() {
            if !self.cell.contains(value) {
                return Err(Error::ValueOutOfDomain {
                    value: format!("{value:?}"),
                    domain: format!("{:?}", self.cell.bounds()),
                });
            }
        }
        Ok(())
    }

    /// Recombines two contents position by position.
    ///
    /// Scans cells in row-major order; at each position, with `probability`
    /// the result takes `b`'s value instead of `a`'s. `max_swaps` caps how
    /// many positions may actually change (`None` = unbounded); once the cap
    /// is hit the remaining candidates are skipped.
    ///
    /// Identity laws: `probability = 0` returns `a`, `probability = 1`
    /// uncapped returns `b`, and swapping `a` with itself returns `a`. One
    /// primitive therefore covers uniform crossover (`probability = 0.5`,
    /// two parents) and uniform mutation (low probability, `b` a fresh
    /// sample).
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
        self.validate(a)?;
        self.validate(b)?;

        let mut data = a.data().to_vec();
        let mut swapped = 0usize;
        for (slot, source) in data.iter_mut().zip(b.data()) {
            if max_swaps.is_some_and(|cap| swapped >= cap) {
                break;
            }
            if rng.random_bool(probability) && slot != source {
                *slot = source.clone();
                swapped += 1;
            }
        }
        Ok(Content {
            shape: self.shape.clone(),
            data,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
