//! Degree-bounded random graph construction.
//!
//! Construction runs in four steps over one owned RNG:
//!
//! 1. the anchor edge joins node 0 and node `N - 1`;
//! 2. in sparse mode every other node receives phantom degree drawn from
//!    `0..=D - 2`;
//! 3. node 0 is wired to `D - 2` hubs sampled without replacement from
//!    `[2, N - 1)`;
//! 4. nodes `1..N` are visited in index order and each draws partners
//!    uniformly from the nodes that still have capacity, without
//!    backtracking. A draw that lands on an existing neighbour adds nothing.
//!
//! Every node ends with degree at most `D`. Nothing forces a node to reach
//! `D`; early indices get first pick of partners.

use rand::{
    Rng, SeedableRng,
    rngs::SmallRng,
    seq::{SliceRandom, index},
};
use tracing::{debug, instrument};

use crate::{
    builder::{FIRST_HUB_CANDIDATE, interior_len},
    graph::{AdjacencyMatrix, DegreeLedger, GeneratedGraph},
    observer::{BuildObserver, NoopObserver},
};

/// Validated generator produced by [`crate::GraphGenBuilder::build`].
///
/// # Examples
/// ```
/// use graphgen_core::GraphGenBuilder;
///
/// let graph = GraphGenBuilder::new(30, 4)
///     .with_seed(3)
///     .build()
///     .expect("valid configuration")
///     .generate();
/// let matrix = graph.adjacency();
/// assert!(matrix.contains_edge(0, 29));
/// assert!((0..30).all(|node| matrix.degree(node) <= 4));
/// ```
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    node_count: usize,
    max_degree: usize,
    hub_count: usize,
    sparse: bool,
    seed: Option<u64>,
}

impl GraphGenerator {
    pub(crate) fn new(
        node_count: usize,
        max_degree: usize,
        hub_count: usize,
        sparse: bool,
        seed: Option<u64>,
    ) -> Self {
        Self {
            node_count,
            max_degree,
            hub_count,
            sparse,
            seed,
        }
    }

    /// Returns the number of nodes each generated graph contains.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the degree bound.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Returns the number of hubs wired to node 0 (`max_degree - 2`).
    #[must_use]
    pub fn hub_count(&self) -> usize {
        self.hub_count
    }

    /// Returns `true` if sparse pre-seeding is enabled.
    #[must_use]
    pub fn is_sparse(&self) -> bool {
        self.sparse
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates a graph without diagnostics.
    ///
    /// Uses the configured seed, or a fresh seed from the thread-local RNG
    /// when none is set. The seed actually used is recorded on the result.
    #[must_use]
    pub fn generate(&self) -> GeneratedGraph {
        self.generate_observed(&mut NoopObserver)
    }

    /// Generates a graph, reporting progress to `observer`.
    pub fn generate_observed<O>(&self, observer: &mut O) -> GeneratedGraph
    where
        O: BuildObserver + ?Sized,
    {
        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
        self.generate_with_seed(seed, observer)
    }

    /// Generates a graph from an explicit seed, reporting to `observer`.
    pub fn generate_with_seed<O>(&self, seed: u64, observer: &mut O) -> GeneratedGraph
    where
        O: BuildObserver + ?Sized,
    {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.construct(&mut rng, observer, Some(seed))
    }

    /// Generates a graph from an injected RNG, reporting to `observer`.
    ///
    /// The result carries no seed because the RNG state is opaque here.
    pub fn generate_with<R, O>(&self, rng: &mut R, observer: &mut O) -> GeneratedGraph
    where
        R: Rng + ?Sized,
        O: BuildObserver + ?Sized,
    {
        self.construct(rng, observer, None)
    }

    #[instrument(
        name = "core.generate",
        skip(self, rng, observer, seed),
        fields(
            node_count = self.node_count,
            max_degree = self.max_degree,
            sparse = self.sparse,
            seed = ?seed,
        ),
    )]
    fn construct<R, O>(&self, rng: &mut R, observer: &mut O, seed: Option<u64>) -> GeneratedGraph
    where
        R: Rng + ?Sized,
        O: BuildObserver + ?Sized,
    {
        let mut state = BuildState::new(self.node_count, self.max_degree);

        let last = self.node_count - 1;
        state.connect(0, last);
        observer.on_anchor(0, last);

        if self.sparse {
            state.seed_phantom_degree(rng);
        }

        let hubs = self.sample_hubs(rng);
        for &hub in &hubs {
            state.connect(0, hub);
        }
        observer.on_hubs(&hubs);

        for node in 1..self.node_count {
            state.fill_node(node, rng, observer);
        }

        let BuildState {
            adjacency, ledger, ..
        } = state;
        debug!(edges = adjacency.edge_count(), "graph constructed");
        GeneratedGraph::new(adjacency, ledger, self.max_degree, self.sparse, hubs, seed)
    }

    fn sample_hubs<R>(&self, rng: &mut R) -> Vec<usize>
    where
        R: Rng + ?Sized,
    {
        if self.hub_count == 0 {
            return Vec::new();
        }
        let mut hubs: Vec<usize> = index::sample(rng, interior_len(self.node_count), self.hub_count)
            .into_iter()
            .map(|offset| offset + FIRST_HUB_CANDIDATE)
            .collect();
        hubs.sort_unstable();
        hubs
    }
}

/// Mutable construction state owned by a single generation pass.
struct BuildState {
    adjacency: AdjacencyMatrix,
    ledger: DegreeLedger,
    max_degree: usize,
}

impl BuildState {
    fn new(node_count: usize, max_degree: usize) -> Self {
        Self {
            adjacency: AdjacencyMatrix::new(node_count),
            ledger: DegreeLedger::new(node_count),
            max_degree,
        }
    }

    fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    fn connect(&mut self, a: usize, b: usize) {
        if self.adjacency.insert_edge(a, b) {
            self.ledger.record_edge(a, b);
        }
    }

    /// Adds phantom degree to every node except the first and last.
    fn seed_phantom_degree<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let ceiling = self.max_degree.saturating_sub(2);
        let last = self.node_count() - 1;
        for node in 1..last {
            let phantom = rng.gen_range(0..=ceiling);
            self.ledger.seed_phantom(node, phantom);
        }
    }

    fn fill_node<R, O>(&mut self, node: usize, rng: &mut R, observer: &mut O)
    where
        R: Rng + ?Sized,
        O: BuildObserver + ?Sized,
    {
        if !self.ledger.has_capacity(node, self.max_degree) {
            observer.on_node_saturated(node, self.ledger.consumed(node));
            return;
        }

        let candidates = self.candidates_for(node);
        let remaining = self.ledger.remaining(node, self.max_degree);
        observer.on_node_visit(node, &candidates, remaining);

        let needed = remaining.min(candidates.len());
        let partners: Vec<usize> = candidates.choose_multiple(rng, needed).copied().collect();
        for partner in partners {
            self.connect(node, partner);
        }
    }

    /// Nodes other than `node` that have spare capacity. Existing neighbours
    /// stay in the list; drawing one is a no-op in [`Self::connect`].
    fn candidates_for(&self, node: usize) -> Vec<usize> {
        (0..self.node_count())
            .filter(|&other| other != node && self.ledger.has_capacity(other, self.max_degree))
            .collect()
    }
}
