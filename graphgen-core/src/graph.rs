//! Adjacency storage and degree bookkeeping for generated graphs.
//!
//! [`AdjacencyMatrix`] holds the undirected edge set as a dense boolean
//! matrix. [`DegreeLedger`] tracks two counters per node: the degree that
//! edges actually materialise and the capacity consumed during construction,
//! which also includes phantom degree seeded by sparse mode.

/// Dense symmetric adjacency matrix without self-loops.
///
/// # Examples
/// ```
/// use graphgen_core::GraphGenBuilder;
///
/// let graph = GraphGenBuilder::new(2, 2)
///     .with_seed(7)
///     .build()
///     .expect("configuration is valid")
///     .generate();
/// let matrix = graph.adjacency();
/// assert!(matrix.contains_edge(0, 1));
/// assert_eq!(matrix.edge_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    node_count: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    pub(crate) fn new(node_count: usize) -> Self {
        Self {
            node_count,
            cells: vec![false; node_count.saturating_mul(node_count)],
        }
    }

    /// Returns the number of nodes (rows) in the matrix.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns `true` when `a` and `b` share an edge. Out-of-range indices
    /// are reported as not adjacent.
    #[must_use]
    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        self.cell(a, b).copied().unwrap_or(false)
    }

    /// Iterates over the neighbours of `node` in increasing index order.
    pub fn neighbours(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(node)
            .iter()
            .enumerate()
            .filter_map(|(index, &present)| present.then_some(index))
    }

    /// Returns the number of edges incident to `node`.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.row(node).iter().filter(|&&present| present).count()
    }

    /// Iterates over every undirected edge once as `(a, b)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.node_count)
            .flat_map(move |a| self.neighbours(a).filter(move |&b| a < b).map(move |b| (a, b)))
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns `true` if the stored relation is symmetric.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.node_count).all(|a| self.neighbours(a).all(|b| self.contains_edge(b, a)))
    }

    /// Inserts the undirected edge `a`-`b`.
    ///
    /// Returns `false` and leaves the matrix untouched when the edge already
    /// exists, when `a == b`, or when either index is out of range.
    pub(crate) fn insert_edge(&mut self, a: usize, b: usize) -> bool {
        if a == b || a >= self.node_count || b >= self.node_count {
            return false;
        }
        if self.contains_edge(a, b) {
            return false;
        }
        self.set(a, b);
        self.set(b, a);
        true
    }

    /// Sets a single directed cell. Used by the reader, which validates
    /// symmetry separately.
    pub(crate) fn set(&mut self, from: usize, to: usize) {
        if let Some(index) = self.offset(from, to) {
            if let Some(cell) = self.cells.get_mut(index) {
                *cell = true;
            }
        }
    }

    fn row(&self, node: usize) -> &[bool] {
        let start = node.saturating_mul(self.node_count);
        let end = start.saturating_add(self.node_count);
        self.cells.get(start..end).unwrap_or(&[])
    }

    fn cell(&self, a: usize, b: usize) -> Option<&bool> {
        self.offset(a, b).and_then(|index| self.cells.get(index))
    }

    fn offset(&self, a: usize, b: usize) -> Option<usize> {
        (a < self.node_count && b < self.node_count).then(|| a * self.node_count + b)
    }
}

/// Per-node degree counters kept in lock-step with an [`AdjacencyMatrix`].
///
/// `materialised` counts edges present in the matrix. `consumed` counts the
/// capacity used up, which equals `materialised` plus any phantom degree
/// seeded in sparse mode. Candidate filtering during construction compares
/// `consumed` against the max degree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DegreeLedger {
    materialised: Vec<usize>,
    consumed: Vec<usize>,
}

impl DegreeLedger {
    pub(crate) fn new(node_count: usize) -> Self {
        Self {
            materialised: vec![0; node_count],
            consumed: vec![0; node_count],
        }
    }

    /// Returns the number of edges materialised at `node`.
    #[must_use]
    pub fn materialised(&self, node: usize) -> usize {
        self.materialised.get(node).copied().unwrap_or(0)
    }

    /// Returns the capacity consumed at `node`, phantom degree included.
    #[must_use]
    pub fn consumed(&self, node: usize) -> usize {
        self.consumed.get(node).copied().unwrap_or(0)
    }

    /// Returns the phantom degree seeded at `node` that never became an edge.
    #[must_use]
    pub fn phantom(&self, node: usize) -> usize {
        self.consumed(node).saturating_sub(self.materialised(node))
    }

    /// Returns the number of nodes tracked by the ledger.
    #[must_use]
    pub fn len(&self) -> usize {
        self.consumed.len()
    }

    /// Returns `true` when the ledger tracks no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.consumed.is_empty()
    }

    pub(crate) fn remaining(&self, node: usize, max_degree: usize) -> usize {
        max_degree.saturating_sub(self.consumed(node))
    }

    pub(crate) fn has_capacity(&self, node: usize, max_degree: usize) -> bool {
        self.consumed(node) < max_degree
    }

    pub(crate) fn seed_phantom(&mut self, node: usize, phantom: usize) {
        if let Some(slot) = self.consumed.get_mut(node) {
            *slot = slot.saturating_add(phantom);
        }
    }

    pub(crate) fn record_edge(&mut self, a: usize, b: usize) {
        for node in [a, b] {
            if let Some(slot) = self.materialised.get_mut(node) {
                *slot += 1;
            }
            if let Some(slot) = self.consumed.get_mut(node) {
                *slot += 1;
            }
        }
    }
}

/// Frozen output of a generation run.
///
/// Holds the adjacency matrix alongside the degree ledger, the configured
/// bound, and the hub nodes wired to node 0. Nothing mutates a
/// [`GeneratedGraph`] once it is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedGraph {
    adjacency: AdjacencyMatrix,
    ledger: DegreeLedger,
    max_degree: usize,
    sparse: bool,
    hubs: Vec<usize>,
    seed: Option<u64>,
}

impl GeneratedGraph {
    pub(crate) fn new(
        adjacency: AdjacencyMatrix,
        ledger: DegreeLedger,
        max_degree: usize,
        sparse: bool,
        hubs: Vec<usize>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            adjacency,
            ledger,
            max_degree,
            sparse,
            hubs,
            seed,
        }
    }

    /// Returns the adjacency matrix.
    #[must_use]
    pub fn adjacency(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    /// Returns the degree ledger recorded during construction.
    #[must_use]
    pub fn ledger(&self) -> &DegreeLedger {
        &self.ledger
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    /// Returns the degree bound the graph was generated under.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Returns `true` if sparse pre-seeding was enabled.
    #[must_use]
    pub fn is_sparse(&self) -> bool {
        self.sparse
    }

    /// Returns the interior hub nodes wired to node 0, in increasing order.
    #[must_use]
    pub fn hubs(&self) -> &[usize] {
        &self.hubs
    }

    /// Returns the seed used to drive the generator, when one was known.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn insert_edge_is_symmetric() {
        let mut matrix = AdjacencyMatrix::new(4);
        assert!(matrix.insert_edge(1, 3));
        assert!(matrix.contains_edge(1, 3));
        assert!(matrix.contains_edge(3, 1));
        assert_eq!(matrix.degree(1), 1);
        assert_eq!(matrix.degree(3), 1);
        assert!(matrix.is_symmetric());
    }

    #[rstest]
    #[case::self_loop(2, 2)]
    #[case::out_of_range(0, 4)]
    fn insert_edge_rejects_invalid_pairs(#[case] a: usize, #[case] b: usize) {
        let mut matrix = AdjacencyMatrix::new(4);
        assert!(!matrix.insert_edge(a, b));
        assert_eq!(matrix.edge_count(), 0);
    }

    #[rstest]
    fn insert_edge_ignores_duplicates() {
        let mut matrix = AdjacencyMatrix::new(3);
        assert!(matrix.insert_edge(0, 2));
        assert!(!matrix.insert_edge(2, 0));
        assert_eq!(matrix.edge_count(), 1);
    }

    #[rstest]
    fn neighbours_are_reported_in_index_order() {
        let mut matrix = AdjacencyMatrix::new(5);
        matrix.insert_edge(2, 4);
        matrix.insert_edge(2, 0);
        matrix.insert_edge(2, 3);
        assert_eq!(matrix.neighbours(2).collect::<Vec<_>>(), vec![0, 3, 4]);
        assert_eq!(matrix.edges().collect::<Vec<_>>(), vec![(0, 2), (2, 3), (2, 4)]);
    }

    #[rstest]
    fn one_way_cell_breaks_symmetry() {
        let mut matrix = AdjacencyMatrix::new(3);
        matrix.set(0, 1);
        assert!(!matrix.is_symmetric());
    }

    #[rstest]
    fn ledger_separates_phantom_from_materialised_degree() {
        let mut ledger = DegreeLedger::new(3);
        ledger.seed_phantom(1, 2);
        ledger.record_edge(0, 1);
        assert_eq!(ledger.materialised(1), 1);
        assert_eq!(ledger.consumed(1), 3);
        assert_eq!(ledger.phantom(1), 2);
        assert_eq!(ledger.remaining(1, 4), 1);
        assert!(!ledger.has_capacity(1, 3));
        assert!(ledger.has_capacity(0, 3));
    }
}
