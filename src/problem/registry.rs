//! Named problem variant registry.
//!
//! Problems are published under `{problem}-{variant}-{version}` names (the
//! default variant omits its segment: `{problem}-{version}`). A [`Registry`]
//! maps those names to builder closures so callers construct variants
//! without knowing their configuration details.

use crate::error::Error;
use std::collections::BTreeMap;

type Builder<P> = Box<dyn Fn() -> Result<P, Error> + Send + Sync>;

/// Maps variant names to problem builders.
///
/// Registration stores a closure, not an instance: every
/// [`make`](Registry::make) call constructs a fresh problem, so construction
/// failures (bad configs, grids too small for door placement) surface per
/// call and variants stay stateless.
pub struct Registry<P> {
    builders: BTreeMap<String, Builder<P>>,
}

impl<P> Registry<P> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            builders: BTreeMap::new(),
        }
    }

    /// Registers a variant under `name`, replacing any previous builder.
    pub fn register<F>(&mut self, name: impl Into<String>, builder: F)
    where
        F: Fn() -> Result<P, Error> + Send + Sync + 'static,
    {
        self.builders.insert(name.into(), Box::new(builder));
    }

    /// Constructs the variant registered under `name`.
    ///
    /// Fails with [`Error::UnknownProblem`] for names never registered, and
    /// propagates the builder's own construction error otherwise.
    pub fn make(&self, name: &str) -> Result<P, Error> {
        match self.builders.get(name) {
            Some(builder) => builder(),
            None => Err(Error::UnknownProblem(name.to_string())),
        }
    }

    /// All registered names in sorted order.
    pub fn list(&self) -> Vec<String> {
        self.builders.keys().cloned().collect()
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }
}

impl<P> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> std::fmt::Debug for Registry<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.list())
            .finish()
    }
}
