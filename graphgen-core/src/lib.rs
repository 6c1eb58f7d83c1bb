//! Degree-bounded random graph generation.
//!
//! [`GraphGenBuilder`] validates a node count and degree bound and yields a
//! [`GraphGenerator`]. Each run produces a [`GeneratedGraph`] whose nodes
//! never exceed the bound, whose first and last node are always adjacent,
//! and whose node 0 fans out to `max_degree - 2` random interior hubs.
//! Graphs are labelled with fixed-width base-26 identifiers ([`NodeLabeler`])
//! and exchanged as adjacency-list text ([`write_adjacency_list`],
//! [`read_adjacency_list`]).
//!
//! # Examples
//! ```
//! use graphgen_core::{GraphGenBuilder, GraphMetadata, NodeLabeler, render_adjacency_list};
//!
//! let graph = GraphGenBuilder::new(8, 3)
//!     .with_seed(2024)
//!     .build()
//!     .expect("configuration is valid")
//!     .generate();
//! let text = render_adjacency_list(
//!     graph.adjacency(),
//!     &NodeLabeler::for_node_count(graph.node_count()),
//!     &GraphMetadata::for_graph(8, 3, None),
//! );
//! assert!(text.starts_with("Graph_N8_D3\n"));
//! assert_eq!(text.lines().count(), 3 + 8);
//! ```

mod builder;
mod error;
mod format;
mod generator;
mod graph;
mod identifier;
mod invariants;
mod observer;

pub use crate::{
    builder::{GraphGenBuilder, MIN_MAX_DEGREE, MIN_NODE_COUNT},
    error::{
        ConfigurationError, ConfigurationErrorCode, FormatError, FormatErrorCode, GraphGenError,
        GraphGenErrorCode, Result,
    },
    format::{
        GraphMetadata, ParsedGraph, output_file_name, read_adjacency_list, render_adjacency_list,
        write_adjacency_list,
    },
    generator::GraphGenerator,
    graph::{AdjacencyMatrix, DegreeLedger, GeneratedGraph},
    identifier::{NodeLabeler, decode, encode, identifier_width},
    invariants::{GraphInvariant, GraphInvariantChecker, GraphInvariantViolation},
    observer::{BuildObserver, NoopObserver, TracingObserver},
};
