//! Configuration for bulk self KNN joins.

use crate::error::JoinError;

/// Configuration for a bulk self KNN join.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use pagejoin_knn::JoinConfig;
///
/// let config = JoinConfig::new(5).with_include_self(false);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.k(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct JoinConfig {
    /// Number of nearest neighbors per object.
    k: usize,
    /// Whether an object may appear in its own neighbor list.
    include_self: bool,
    /// Whether candidate pages are pruned against the page bound.
    pruning: bool,
}

impl JoinConfig {
    /// Creates a configuration with the given k.
    ///
    /// Defaults: self-matches included, page-level pruning enabled.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            include_self: true,
            pruning: true,
        }
    }

    /// Sets whether an object may appear in its own neighbor list.
    ///
    /// Included by default: in a self-join every object matches itself at
    /// the metric's identity distance and occupies one of its k slots.
    pub fn with_include_self(mut self, include_self: bool) -> Self {
        self.include_self = include_self;
        self
    }

    /// Enables or disables page-level pruning.
    ///
    /// Disabling exists for instrumentation; the join result is identical
    /// either way.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Returns the number of nearest neighbors per object.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns whether self-matches are admitted.
    pub fn include_self(&self) -> bool {
        self.include_self
    }

    /// Returns whether page-level pruning is active.
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Validates this configuration.
    ///
    /// Returns an error if k < 1.
    pub fn validate(&self) -> Result<(), JoinError> {
        if self.k < 1 {
            return Err(JoinError::InvalidK { k: self.k });
        }
        Ok(())
    }
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
