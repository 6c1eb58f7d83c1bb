//! Structural invariant checks for generated graphs.
//!
//! The checker is surfaced via [`GeneratedGraph::invariants`] so property
//! tests and callers can assert graph health without reimplementing the
//! traversal logic.

use thiserror::Error;

use crate::{builder::FIRST_HUB_CANDIDATE, graph::GeneratedGraph};

/// Enumerates the structural invariants every generated graph satisfies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphInvariant {
    /// The diagonal of the adjacency matrix is empty.
    NoSelfLoops,
    /// Every edge is stored in both directions.
    Symmetry,
    /// No node has more than `max_degree` neighbours.
    DegreeBounds,
    /// Ledger counters agree with the adjacency matrix.
    LedgerConsistency,
    /// The first and last node are adjacent.
    AnchorEdge,
    /// Node 0 is wired to exactly `max_degree - 2` interior hubs.
    HubFanOut,
}

impl GraphInvariant {
    /// Returns all invariants in the order they should be evaluated.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::NoSelfLoops,
            Self::Symmetry,
            Self::DegreeBounds,
            Self::LedgerConsistency,
            Self::AnchorEdge,
            Self::HubFanOut,
        ]
    }
}

/// Reports an invariant violation surfaced by [`GraphInvariantChecker`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GraphInvariantViolation {
    /// A node is adjacent to itself.
    #[error("node {node} is adjacent to itself")]
    SelfLoop {
        /// Offending node.
        node: usize,
    },
    /// A directed entry lacks its reverse.
    #[error("edge {origin}->{target} is missing the reverse entry")]
    MissingBacklink {
        /// Node storing the one-way entry.
        origin: usize,
        /// Node lacking the reverse entry.
        target: usize,
    },
    /// A node exceeded the degree bound.
    #[error("node {node} has {degree} neighbour(s), exceeding limit {limit}")]
    DegreeBounds {
        /// Node whose adjacency exceeded the bound.
        node: usize,
        /// Neighbours counted in the matrix.
        degree: usize,
        /// Configured max degree.
        limit: usize,
    },
    /// A ledger counter disagrees with the matrix.
    #[error(
        "node {node} ledger reports materialised={materialised}, consumed={consumed} \
         but the matrix holds {degree} edge(s)"
    )]
    LedgerMismatch {
        /// Node whose counters disagree.
        node: usize,
        /// Materialised degree recorded by the ledger.
        materialised: usize,
        /// Consumed capacity recorded by the ledger.
        consumed: usize,
        /// Degree counted in the matrix.
        degree: usize,
    },
    /// The first and last node are not adjacent.
    #[error("anchor edge 0-{last} is missing")]
    MissingAnchor {
        /// Index of the last node.
        last: usize,
    },
    /// The recorded hubs do not match the expected fan-out.
    #[error("expected {expected} hub(s) wired to node 0 but found {found}")]
    HubCount {
        /// Hubs required by the max degree.
        expected: usize,
        /// Hubs recorded on the graph.
        found: usize,
    },
    /// A recorded hub lies outside the interior or is not adjacent to node 0.
    #[error("hub {hub} is outside the interior or not adjacent to node 0")]
    InvalidHub {
        /// Offending hub index.
        hub: usize,
    },
}

/// Helper returned by [`GeneratedGraph::invariants`] to run structural
/// checks.
///
/// # Examples
/// ```
/// use graphgen_core::GraphGenBuilder;
///
/// let graph = GraphGenBuilder::new(16, 4)
///     .with_seed(5)
///     .build()
///     .expect("valid configuration")
///     .generate();
/// graph.invariants().check_all().expect("generated graphs are valid");
/// assert!(graph.invariants().collect_all().is_empty());
/// ```
#[derive(Debug)]
pub struct GraphInvariantChecker<'graph> {
    graph: &'graph GeneratedGraph,
}

impl<'graph> GraphInvariantChecker<'graph> {
    pub(crate) fn new(graph: &'graph GeneratedGraph) -> Self {
        Self { graph }
    }

    /// Runs all invariants, returning the first violation encountered.
    ///
    /// # Errors
    /// Returns the first [`GraphInvariantViolation`] found.
    pub fn check_all(&self) -> Result<(), GraphInvariantViolation> {
        self.check_many(GraphInvariant::all())
    }

    /// Runs a custom subset of invariants in the provided order.
    ///
    /// # Errors
    /// Returns the first [`GraphInvariantViolation`] found.
    pub fn check_many(
        &self,
        invariants: impl IntoIterator<Item = GraphInvariant>,
    ) -> Result<(), GraphInvariantViolation> {
        self.run_with_mode(invariants, &mut EvaluationMode::FailFast)
    }

    /// Runs a single invariant.
    ///
    /// # Errors
    /// Returns the first [`GraphInvariantViolation`] found.
    pub fn check(&self, invariant: GraphInvariant) -> Result<(), GraphInvariantViolation> {
        self.check_many([invariant])
    }

    /// Executes every invariant and returns the full set of violations.
    #[must_use]
    pub fn collect_all(&self) -> Vec<GraphInvariantViolation> {
        let mut violations = Vec::new();
        let _ = self.run_with_mode(
            GraphInvariant::all(),
            &mut EvaluationMode::Collect(&mut violations),
        );
        violations
    }

    fn run_with_mode(
        &self,
        invariants: impl IntoIterator<Item = GraphInvariant>,
        mode: &mut EvaluationMode<'_>,
    ) -> Result<(), GraphInvariantViolation> {
        for invariant in invariants {
            match invariant {
                GraphInvariant::NoSelfLoops => self.check_self_loops(mode)?,
                GraphInvariant::Symmetry => self.check_symmetry(mode)?,
                GraphInvariant::DegreeBounds => self.check_degree_bounds(mode)?,
                GraphInvariant::LedgerConsistency => self.check_ledger(mode)?,
                GraphInvariant::AnchorEdge => self.check_anchor(mode)?,
                GraphInvariant::HubFanOut => self.check_hubs(mode)?,
            }
        }
        Ok(())
    }

    fn check_self_loops(&self, mode: &mut EvaluationMode<'_>) -> Result<(), GraphInvariantViolation> {
        let matrix = self.graph.adjacency();
        for node in 0..matrix.node_count() {
            if matrix.contains_edge(node, node) {
                mode.record(GraphInvariantViolation::SelfLoop { node })?;
            }
        }
        Ok(())
    }

    fn check_symmetry(&self, mode: &mut EvaluationMode<'_>) -> Result<(), GraphInvariantViolation> {
        let matrix = self.graph.adjacency();
        for origin in 0..matrix.node_count() {
            for target in matrix.neighbours(origin) {
                if !matrix.contains_edge(target, origin) {
                    mode.record(GraphInvariantViolation::MissingBacklink { origin, target })?;
                }
            }
        }
        Ok(())
    }

    fn check_degree_bounds(
        &self,
        mode: &mut EvaluationMode<'_>,
    ) -> Result<(), GraphInvariantViolation> {
        let matrix = self.graph.adjacency();
        let limit = self.graph.max_degree();
        for node in 0..matrix.node_count() {
            let degree = matrix.degree(node);
            if degree > limit {
                mode.record(GraphInvariantViolation::DegreeBounds {
                    node,
                    degree,
                    limit,
                })?;
            }
        }
        Ok(())
    }

    fn check_ledger(&self, mode: &mut EvaluationMode<'_>) -> Result<(), GraphInvariantViolation> {
        let matrix = self.graph.adjacency();
        let ledger = self.graph.ledger();
        for node in 0..matrix.node_count() {
            let degree = matrix.degree(node);
            let materialised = ledger.materialised(node);
            let consumed = ledger.consumed(node);
            if materialised != degree || consumed < materialised || consumed > self.graph.max_degree() {
                mode.record(GraphInvariantViolation::LedgerMismatch {
                    node,
                    materialised,
                    consumed,
                    degree,
                })?;
            }
        }
        Ok(())
    }

    fn check_anchor(&self, mode: &mut EvaluationMode<'_>) -> Result<(), GraphInvariantViolation> {
        let last = self.graph.node_count().saturating_sub(1);
        if !self.graph.adjacency().contains_edge(0, last) {
            mode.record(GraphInvariantViolation::MissingAnchor { last })?;
        }
        Ok(())
    }

    fn check_hubs(&self, mode: &mut EvaluationMode<'_>) -> Result<(), GraphInvariantViolation> {
        let expected = self.graph.max_degree().saturating_sub(2);
        let hubs = self.graph.hubs();
        if hubs.len() != expected {
            mode.record(GraphInvariantViolation::HubCount {
                expected,
                found: hubs.len(),
            })?;
        }
        let interior = FIRST_HUB_CANDIDATE..self.graph.node_count().saturating_sub(1);
        for &hub in hubs {
            if !interior.contains(&hub) || !self.graph.adjacency().contains_edge(0, hub) {
                mode.record(GraphInvariantViolation::InvalidHub { hub })?;
            }
        }
        Ok(())
    }
}

enum EvaluationMode<'a> {
    FailFast,
    Collect(&'a mut Vec<GraphInvariantViolation>),
}

impl EvaluationMode<'_> {
    fn record(&mut self, violation: GraphInvariantViolation) -> Result<(), GraphInvariantViolation> {
        match self {
            Self::FailFast => Err(violation),
            Self::Collect(sink) => {
                sink.push(violation);
                Ok(())
            }
        }
    }
}

impl GeneratedGraph {
    /// Returns a checker for the structural invariants of this graph.
    #[must_use]
    pub fn invariants(&self) -> GraphInvariantChecker<'_> {
        GraphInvariantChecker::new(self)
    }
}
