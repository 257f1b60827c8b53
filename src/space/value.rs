//! Scalar per-cell value domains.
//!
//! A [`Space`] describes the legal values of a single content cell and knows
//! how to sample, validate, and repair them. [`ArraySpace`] lifts a scalar
//! domain over an n-dimensional grid.
//!
//! [`ArraySpace`]: super::ArraySpace

use rand::Rng;

/// A scalar value domain: the contract every cell type implements.
///
/// Implementations must be cheap to clone and free of interior state; all
/// randomness comes from the explicitly passed generator.
pub trait Space: Clone + Send + Sync {
    /// The concrete cell value type.
    type Value: Clone + PartialEq + std::fmt::Debug + Send + Sync;

    /// Draws one value uniformly from the domain.
    fn sample<R: Rng>(&self, rng: &mut R) -> Self::Value;

    /// Whether `value` lies inside the domain.
    fn contains(&self, value: &Self::Value) -> bool;

    /// Clamps `value` to the nearest legal value.
    ///
    /// Repair never fails; it is used by flat decoding to absorb malformed
    /// numeric input instead of rejecting it.
    fn repair(&self, value: Self::Value) -> Self::Value;

    /// Inclusive `(min, max)` bounds of the domain.
    fn bounds(&self) -> (Self::Value, Self::Value);
}

/// Inclusive integer domain `[min, max]`.
///
/// The common tile-index construction [`IntSpace::new(n)`](IntSpace::new)
/// covers `0..=n-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntSpace {
    min: i64,
    max: i64,
}

impl IntSpace {
    /// Domain of `values` distinct tile indices: `0..=values-1`.
    ///
    /// # Panics
    /// Panics if `values` is zero.
    pub fn new(values: i64) -> Self {
        assert!(values > 0, "IntSpace needs at least one value");
        Self {
            min: 0,
            max: values - 1,
        }
    }

    /// Domain over the inclusive range `[min, max]`.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn bounded(min: i64, max: i64) -> Self {
        assert!(min <= max, "IntSpace range must satisfy min <= max");
        Self { min, max }
    }
}

impl Space for IntSpace {
    type Value = i64;

    fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.random_range(self.min..=self.max)
    }

    fn contains(&self, value: &i64) -> bool {
        (self.min..=self.max).contains(value)
    }

    fn repair(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }
}

/// Inclusive continuous domain `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatSpace {
    min: f64,
    max: f64,
}

impl FloatSpace {
    /// Domain over the inclusive range `[min, max]`.
    ///
    /// # Panics
    /// Panics if `min > max` or either bound is not finite.
    pub fn bounded(min: f64, max: f64) -> Self {
        assert!(min.is_finite() && max.is_finite(), "bounds must be finite");
        assert!(min <= max, "FloatSpace range must satisfy min <= max");
        Self { min, max }
    }
}

impl Space for FloatSpace {
    type Value = f64;

    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.min == self.max {
            self.min
        } else {
            rng.random_range(self.min..=self.max)
        }
    }

    fn contains(&self, value: &f64) -> bool {
        value.is_finite() && (self.min..=self.max).contains(value)
    }

    fn repair(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}
