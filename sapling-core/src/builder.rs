//! Builder utilities for configuring the spanning tree [`Engine`].
//!
//! Collects the knobs that change how the merge loop runs without changing
//! which total weight it reaches.

use crate::{engine::Engine, heap::HeapMergeStrategy};

/// Configures and constructs [`Engine`] instances.
///
/// # Examples
/// ```
/// use sapling_core::{EngineBuilder, HeapMergeStrategy};
///
/// let engine = EngineBuilder::new()
///     .with_merge_strategy(HeapMergeStrategy::Concatenate)
///     .with_path_compression(true)
///     .build();
/// assert_eq!(engine.merge_strategy(), HeapMergeStrategy::Concatenate);
/// assert!(engine.path_compression());
/// assert!(!engine.invariant_checks());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineBuilder {
    merge_strategy: HeapMergeStrategy,
    path_compression: bool,
    invariant_checks: bool,
}

impl EngineBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use sapling_core::{EngineBuilder, HeapMergeStrategy};
    ///
    /// let builder = EngineBuilder::new();
    /// assert_eq!(builder.merge_strategy(), HeapMergeStrategy::Reinsert);
    /// assert!(!builder.path_compression());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects how the heaps of two merging trees are combined.
    #[must_use]
    pub fn with_merge_strategy(mut self, strategy: HeapMergeStrategy) -> Self {
        self.merge_strategy = strategy;
        self
    }

    /// Returns the configured heap merge strategy.
    #[must_use]
    pub fn merge_strategy(&self) -> HeapMergeStrategy {
        self.merge_strategy
    }

    /// Enables path compression for component lookups.
    #[must_use]
    pub fn with_path_compression(mut self, enabled: bool) -> Self {
        self.path_compression = enabled;
        self
    }

    /// Returns whether component lookups compress paths.
    #[must_use]
    pub fn path_compression(&self) -> bool {
        self.path_compression
    }

    /// Re-validates the partition of vertices across trees after every merge.
    ///
    /// Each check scans the whole graph, so this is meant for diagnosis rather
    /// than production runs.
    ///
    /// # Examples
    /// ```
    /// use sapling_core::EngineBuilder;
    ///
    /// let builder = EngineBuilder::new().with_invariant_checks(true);
    /// assert!(builder.invariant_checks());
    /// ```
    #[must_use]
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.invariant_checks = enabled;
        self
    }

    /// Returns whether partition checks run after every merge.
    #[must_use]
    pub fn invariant_checks(&self) -> bool {
        self.invariant_checks
    }

    /// Constructs an [`Engine`] from the current configuration.
    #[must_use]
    pub fn build(self) -> Engine {
        Engine::new(
            self.merge_strategy,
            self.path_compression,
            self.invariant_checks,
        )
    }
}
