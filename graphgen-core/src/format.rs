//! Adjacency-list text format.
//!
//! A file holds three header lines (name, description, max degree) followed
//! by one `<label>:<neighbour>,<neighbour>,…` line per node in index order.
//! Neighbours are listed in increasing index order, and a node without
//! neighbours is written as `<label>:`.

use std::io::{self, BufRead, Write};

use crate::{
    error::FormatError,
    graph::AdjacencyMatrix,
    identifier::{NodeLabeler, decode, identifier_width},
};

const NODE_SEPARATOR: char = ':';
const NEIGHBOUR_SEPARATOR: char = ',';

/// Header information written ahead of the node lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphMetadata {
    /// Graph name, written on the first line.
    pub name: String,
    /// Free-text description, written verbatim on the second line.
    pub description: String,
    /// Degree bound, written as a decimal on the third line.
    pub max_degree: usize,
}

impl GraphMetadata {
    /// Builds metadata for a generated graph.
    ///
    /// The name is `Graph_N<nodes>_D<degree>`. Without an explicit
    /// description a sentence naming both figures is used.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::GraphMetadata;
    ///
    /// let metadata = GraphMetadata::for_graph(8, 3, None);
    /// assert_eq!(metadata.name, "Graph_N8_D3");
    /// assert_eq!(metadata.description, "A graph with 8 nodes and a max degree of 3");
    ///
    /// let custom = GraphMetadata::for_graph(8, 3, Some("ring-ish".into()));
    /// assert_eq!(custom.description, "ring-ish");
    /// ```
    #[must_use]
    pub fn for_graph(node_count: usize, max_degree: usize, description: Option<String>) -> Self {
        Self {
            name: format!("Graph_N{node_count}_D{max_degree}"),
            description: description.unwrap_or_else(|| {
                format!("A graph with {node_count} nodes and a max degree of {max_degree}")
            }),
            max_degree,
        }
    }
}

/// Returns the output file name for a generated graph.
///
/// # Examples
/// ```
/// use graphgen_core::output_file_name;
///
/// assert_eq!(output_file_name(10, 4, false), "Graph_N10_D4.txt");
/// assert_eq!(output_file_name(10, 4, true), "Graph_N10_D4_sparse.txt");
/// ```
#[must_use]
pub fn output_file_name(node_count: usize, max_degree: usize, sparse: bool) -> String {
    let suffix = if sparse { "_sparse" } else { "" };
    format!("Graph_N{node_count}_D{max_degree}{suffix}.txt")
}

/// Writes `matrix` as an adjacency list to `writer`.
///
/// # Errors
/// Returns any [`io::Error`] raised by `writer`.
pub fn write_adjacency_list<W: Write>(
    mut writer: W,
    matrix: &AdjacencyMatrix,
    labeler: &NodeLabeler,
    metadata: &GraphMetadata,
) -> io::Result<()> {
    writeln!(writer, "{}", metadata.name)?;
    writeln!(writer, "{}", metadata.description)?;
    writeln!(writer, "{}", metadata.max_degree)?;

    let labels = labeler.labels();
    for (node, label) in labels.iter().enumerate() {
        write!(writer, "{label}{NODE_SEPARATOR}")?;
        let mut first = true;
        for neighbour in matrix.neighbours(node) {
            if !first {
                write!(writer, "{NEIGHBOUR_SEPARATOR}")?;
            }
            first = false;
            match labels.get(neighbour) {
                Some(neighbour_label) => write!(writer, "{neighbour_label}")?,
                None => write!(writer, "{}", labeler.label(neighbour))?,
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Renders `matrix` as an adjacency-list string.
///
/// # Examples
/// ```
/// use graphgen_core::{GraphGenBuilder, GraphMetadata, NodeLabeler, render_adjacency_list};
///
/// let graph = GraphGenBuilder::new(2, 2)
///     .with_seed(1)
///     .build()
///     .expect("valid configuration")
///     .generate();
/// let text = render_adjacency_list(
///     graph.adjacency(),
///     &NodeLabeler::for_node_count(2),
///     &GraphMetadata::for_graph(2, 2, Some("pair".into())),
/// );
/// assert_eq!(text, "Graph_N2_D2\npair\n2\nA:B\nB:A\n");
/// ```
#[must_use]
pub fn render_adjacency_list(
    matrix: &AdjacencyMatrix,
    labeler: &NodeLabeler,
    metadata: &GraphMetadata,
) -> String {
    let mut buffer = Vec::new();
    if write_adjacency_list(&mut buffer, matrix, labeler, metadata).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Graph recovered from an adjacency-list file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedGraph {
    /// Header information.
    pub metadata: GraphMetadata,
    /// Symmetric adjacency reconstructed from the node lines.
    pub adjacency: AdjacencyMatrix,
}

struct NodeLine {
    line: usize,
    label: String,
    neighbours: Vec<String>,
}

/// Reads an adjacency list produced by [`write_adjacency_list`].
///
/// Node labels must appear in index order and be as wide as the node count
/// requires. Every edge must be listed from both endpoints.
///
/// # Errors
/// Returns [`FormatError`] on I/O failure, missing or malformed headers,
/// malformed node lines, and any neighbour list that is inconsistent with
/// the declared max degree or with the other lines.
///
/// # Examples
/// ```
/// use graphgen_core::read_adjacency_list;
///
/// let text = "Graph_N3_D2\ntriangle-ish\n2\nA:B,C\nB:A\nC:A\n";
/// let parsed = read_adjacency_list(text.as_bytes()).expect("valid adjacency list");
/// assert_eq!(parsed.metadata.max_degree, 2);
/// assert!(parsed.adjacency.contains_edge(0, 2));
/// assert_eq!(parsed.adjacency.edge_count(), 2);
/// ```
pub fn read_adjacency_list<R: BufRead>(reader: R) -> Result<ParsedGraph, FormatError> {
    let mut lines = reader.lines();
    let name = next_header(&mut lines, "name")?;
    let description = next_header(&mut lines, "description")?;
    let raw_degree = next_header(&mut lines, "max degree")?;
    let max_degree = raw_degree
        .trim()
        .parse::<usize>()
        .map_err(|_| FormatError::InvalidMaxDegree { raw: raw_degree.clone() })?;

    let mut nodes = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        nodes.push(split_node_line(&line, offset + 4)?);
    }

    let adjacency = build_adjacency(&nodes, max_degree)?;
    Ok(ParsedGraph {
        metadata: GraphMetadata {
            name,
            description,
            max_degree,
        },
        adjacency,
    })
}

fn next_header<I>(lines: &mut I, field: &'static str) -> Result<String, FormatError>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(FormatError::MissingHeader { field }),
    }
}

fn split_node_line(raw: &str, line: usize) -> Result<NodeLine, FormatError> {
    let (label, rest) = raw
        .split_once(NODE_SEPARATOR)
        .ok_or(FormatError::MissingSeparator { line })?;
    let neighbours = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split(NEIGHBOUR_SEPARATOR).map(str::to_owned).collect()
    };
    Ok(NodeLine {
        line,
        label: label.to_owned(),
        neighbours,
    })
}

fn build_adjacency(nodes: &[NodeLine], max_degree: usize) -> Result<AdjacencyMatrix, FormatError> {
    let labeler = NodeLabeler::for_node_count(nodes.len());
    let mut adjacency = AdjacencyMatrix::new(nodes.len());

    for (expected, node) in nodes.iter().enumerate() {
        let found = resolve(&labeler, &node.label, node.line)?;
        if found != expected {
            return Err(FormatError::UnexpectedNode {
                line: node.line,
                expected: labeler.label(expected),
                found: node.label.clone(),
            });
        }
        if node.neighbours.len() > max_degree {
            return Err(FormatError::DegreeExceeded {
                node: node.label.clone(),
                degree: node.neighbours.len(),
                max_degree,
            });
        }
        for neighbour in &node.neighbours {
            let target = labeler.index_of(neighbour).ok_or_else(|| {
                FormatError::UnknownNeighbour {
                    node: node.label.clone(),
                    neighbour: neighbour.clone(),
                }
            })?;
            if target == expected {
                return Err(FormatError::SelfReference {
                    node: node.label.clone(),
                });
            }
            if adjacency.contains_edge(expected, target) {
                return Err(FormatError::DuplicateNeighbour {
                    node: node.label.clone(),
                    neighbour: neighbour.clone(),
                });
            }
            adjacency.set(expected, target);
        }
    }

    if let Some((from, to)) = first_one_way_edge(&adjacency) {
        return Err(FormatError::OneWayEdge {
            from: labeler.label(from),
            to: labeler.label(to),
        });
    }
    Ok(adjacency)
}

fn resolve(labeler: &NodeLabeler, label: &str, line: usize) -> Result<usize, FormatError> {
    if label.len() == identifier_width(labeler.node_count()) {
        if let Some(index) = decode(label) {
            return Ok(index);
        }
    }
    Err(FormatError::InvalidIdentifier {
        line,
        label: label.to_owned(),
    })
}

fn first_one_way_edge(adjacency: &AdjacencyMatrix) -> Option<(usize, usize)> {
    (0..adjacency.node_count()).find_map(|from| {
        adjacency
            .neighbours(from)
            .find(|&to| !adjacency.contains_edge(to, from))
            .map(|to| (from, to))
    })
}
