//! Builder utilities for configuring graph generation.
//!
//! Validates node count and degree bound before constructing a
//! [`GraphGenerator`].

use crate::{
    Result,
    error::{ConfigurationError, GraphGenError},
    generator::GraphGenerator,
};

/// Smallest node count that has distinct first and last nodes.
pub const MIN_NODE_COUNT: usize = 2;

/// Smallest max degree that leaves room for the anchor edge on node 0.
pub const MIN_MAX_DEGREE: usize = 2;

/// Number of node 0 slots reserved before hub fan-out: the anchor edge and
/// the slot left for the greedy pass.
const RESERVED_ANCHOR_SLOTS: usize = 2;

/// Lowest index eligible as a hub; nodes 0 and 1 are excluded.
pub(crate) const FIRST_HUB_CANDIDATE: usize = 2;

/// Configures and constructs [`GraphGenerator`] instances.
///
/// # Examples
/// ```
/// use graphgen_core::GraphGenBuilder;
///
/// let generator = GraphGenBuilder::new(10, 4)
///     .with_sparse(true)
///     .with_seed(42)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.node_count(), 10);
/// assert_eq!(generator.hub_count(), 2);
/// assert!(generator.is_sparse());
/// ```
#[derive(Debug, Clone)]
pub struct GraphGenBuilder {
    node_count: usize,
    max_degree: usize,
    sparse: bool,
    seed: Option<u64>,
}

impl GraphGenBuilder {
    /// Creates a builder for `node_count` nodes bounded by `max_degree`.
    ///
    /// Sparse pre-seeding is disabled and no seed is fixed.
    #[must_use]
    pub fn new(node_count: usize, max_degree: usize) -> Self {
        Self {
            node_count,
            max_degree,
            sparse: false,
            seed: None,
        }
    }

    /// Enables or disables sparse pre-seeding of the degree counters.
    #[must_use]
    pub fn with_sparse(mut self, sparse: bool) -> Self {
        self.sparse = sparse;
        self
    }

    /// Fixes the seed so repeated runs produce the same graph.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::GraphGenBuilder;
    ///
    /// let build = || {
    ///     GraphGenBuilder::new(12, 3)
    ///         .with_seed(9)
    ///         .build()
    ///         .expect("valid configuration")
    ///         .generate()
    /// };
    /// assert_eq!(build().adjacency(), build().adjacency());
    /// ```
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the configured max degree.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Returns `true` if sparse pre-seeding is enabled.
    #[must_use]
    pub fn sparse(&self) -> bool {
        self.sparse
    }

    /// Returns the fixed seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration and constructs a [`GraphGenerator`].
    ///
    /// # Errors
    /// Returns [`GraphGenError::InvalidConfiguration`] when the node count or
    /// max degree is below its minimum, or when node 0 would need more hub
    /// neighbours than the interior `[2, node_count - 1)` provides.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::{ConfigurationError, GraphGenBuilder, GraphGenError};
    ///
    /// let err = GraphGenBuilder::new(4, 5).build().expect_err("too few interior nodes");
    /// assert!(matches!(
    ///     err,
    ///     GraphGenError::InvalidConfiguration(ConfigurationError::HubSampleExceedsInterior {
    ///         hubs: 3,
    ///         interior: 1,
    ///         ..
    ///     })
    /// ));
    /// ```
    pub fn build(self) -> Result<GraphGenerator> {
        if self.node_count < MIN_NODE_COUNT {
            return Err(ConfigurationError::NodeCountTooSmall {
                got: self.node_count,
                minimum: MIN_NODE_COUNT,
            }
            .into());
        }
        if self.max_degree < MIN_MAX_DEGREE {
            return Err(ConfigurationError::MaxDegreeTooSmall {
                got: self.max_degree,
                minimum: MIN_MAX_DEGREE,
            }
            .into());
        }

        let hubs = self.max_degree - RESERVED_ANCHOR_SLOTS;
        let interior = interior_len(self.node_count);
        if hubs > interior {
            return Err(GraphGenError::from(
                ConfigurationError::HubSampleExceedsInterior {
                    node_count: self.node_count,
                    max_degree: self.max_degree,
                    hubs,
                    interior,
                },
            ));
        }

        Ok(GraphGenerator::new(
            self.node_count,
            self.max_degree,
            hubs,
            self.sparse,
            self.seed,
        ))
    }
}

/// Number of hub candidates in `[2, node_count - 1)`.
pub(crate) fn interior_len(node_count: usize) -> usize {
    node_count.saturating_sub(FIRST_HUB_CANDIDATE + 1)
}
