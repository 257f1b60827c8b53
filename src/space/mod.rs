//! Content spaces: the legal shape and range of generated artifacts.
//!
//! A space answers three questions for any generator working against the
//! benchmark: what does valid content look like (shape + per-cell domain),
//! how is fresh content drawn, and how are two contents recombined without
//! breaking structural validity.
//!
//! # Key Types
//!
//! - [`Space`]: scalar per-cell domain contract ([`IntSpace`], [`FloatSpace`])
//! - [`ArraySpace`]: n-dimensional grid space with sampling, a flat
//!   encode/decode pair, and the `content_swap` recombination primitive
//! - [`Content`]: one concrete artifact, value-semantic and shape-tagged
//! - [`FrozenArraySpace`]: an array space with cells pinned at construction
//!   via one of three [`FreezeOptions`] strategies

mod array;
mod frozen;
mod value;

pub use array::{ArraySpace, Content};
pub use frozen::{FreezeOptions, FrozenArraySpace};
pub use value::{FloatSpace, IntSpace, Space};
