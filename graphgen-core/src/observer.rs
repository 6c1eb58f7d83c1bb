//! Observation hooks invoked while a graph is being constructed.
//!
//! Observers only see borrowed snapshots of the construction state, so they
//! cannot influence which edges are drawn.

use tracing::{debug, info};

/// Receives progress notifications from [`crate::GraphGenerator`].
///
/// Every hook has an empty default so implementors override only what they
/// need.
///
/// # Examples
/// ```
/// use graphgen_core::{BuildObserver, GraphGenBuilder};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// #[derive(Default)]
/// struct CountVisits(usize);
///
/// impl BuildObserver for CountVisits {
///     fn on_node_visit(&mut self, _node: usize, _candidates: &[usize], _needed: usize) {
///         self.0 += 1;
///     }
/// }
///
/// let generator = GraphGenBuilder::new(6, 3).build().expect("valid configuration");
/// let mut observer = CountVisits::default();
/// let mut rng = SmallRng::seed_from_u64(11);
/// let graph = generator.generate_with(&mut rng, &mut observer);
/// assert!(observer.0 <= graph.node_count() - 1);
/// ```
pub trait BuildObserver {
    /// Called once the anchor edge between the first and last node exists.
    fn on_anchor(&mut self, _first: usize, _last: usize) {}

    /// Called with the interior hubs wired to node 0, in increasing order.
    fn on_hubs(&mut self, _hubs: &[usize]) {}

    /// Called when the greedy pass skips `node` because it has no capacity
    /// left.
    fn on_node_saturated(&mut self, _node: usize, _consumed: usize) {}

    /// Called when the greedy pass visits `node`, before partners are drawn.
    fn on_node_visit(&mut self, _node: usize, _candidates: &[usize], _needed: usize) {}
}

/// Observer that discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl BuildObserver for NoopObserver {}

/// Observer that reports construction progress as `tracing` events.
///
/// Node visits are emitted at `INFO` so they appear under the default filter;
/// the remaining hooks log at `DEBUG`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl BuildObserver for TracingObserver {
    fn on_anchor(&mut self, first: usize, last: usize) {
        debug!(first, last, "anchor edge placed");
    }

    fn on_hubs(&mut self, hubs: &[usize]) {
        debug!(hubs = ?hubs, count = hubs.len(), "hub fan-out placed");
    }

    fn on_node_saturated(&mut self, node: usize, consumed: usize) {
        debug!(node, consumed, "node saturated; skipping");
    }

    fn on_node_visit(&mut self, node: usize, candidates: &[usize], needed: usize) {
        info!(node, candidates = ?candidates, needed, "selecting partners");
    }
}
