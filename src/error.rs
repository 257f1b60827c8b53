//! Crate-wide error type.
//!
//! Configuration problems (bad freeze options, grids too small for door
//! placement, unknown registry names) surface at construction time.
//! Per-content validation problems surface from [`Problem::info`] and are
//! isolated per item by the batch evaluator.
//!
//! [`Problem::info`]: crate::problem::Problem::info

use thiserror::Error;

/// Errors produced by space construction, problem construction, and
/// content validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Lookup of a problem name that was never registered.
    #[error("unknown problem `{0}`")]
    UnknownProblem(String),

    /// Freeze options that cannot be applied to the target space.
    #[error("invalid freeze options: {0}")]
    FreezeConfig(String),

    /// A problem configuration rejected at construction time.
    #[error("invalid problem config: {0}")]
    Config(String),

    /// Content (or reference content) whose shape does not match the space.
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Shape declared by the space.
        expected: Vec<usize>,
        /// Shape of the offending content.
        actual: Vec<usize>,
    },

    /// Flat input whose length does not match the space's cell count.
    #[error("flat length mismatch: expected {expected} cells, got {actual}")]
    FlatLength {
        /// Cell count of the space.
        expected: usize,
        /// Length of the offending flat array.
        actual: usize,
    },

    /// A coordinate outside the space's bounds or of the wrong arity.
    #[error("coordinate {coordinate:?} invalid for shape {shape:?}")]
    InvalidCoordinate {
        /// The offending coordinate.
        coordinate: Vec<usize>,
        /// Shape of the space.
        shape: Vec<usize>,
    },

    /// A cell value outside the declared per-cell domain.
    #[error("value {value} outside cell domain {domain}")]
    ValueOutOfDomain {
        /// Display form of the offending value.
        value: String,
        /// Display form of the cell domain.
        domain: String,
    },

    /// A probability parameter outside `[0, 1]`.
    #[error("probability {0} must be within [0, 1]")]
    InvalidProbability(f64),

    /// A grid too small for the door separation constraint.
    #[error(
        "grid {width}x{height} cannot place doors with perimeter separation >= {min_separation}"
    )]
    GridTooSmall {
        /// Interior grid width.
        width: usize,
        /// Interior grid height.
        height: usize,
        /// Required minimum perimeter distance between the doors.
        min_separation: usize,
    },

    /// Control count that is neither 0, 1 (broadcast), nor one per content.
    #[error("control count {controls} does not match content count {contents}")]
    ControlCount {
        /// Number of controls supplied.
        controls: usize,
        /// Number of contents in the batch.
        contents: usize,
    },
}
