//! Error types for the graphgen core library.
//!
//! Defines the configuration and adjacency-list errors exposed by the public
//! API, each paired with a stable machine-readable code.

use std::{fmt, io};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Reason a [`crate::GraphGenBuilder`] configuration was rejected.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigurationError {
    /// The graph needs distinct first and last nodes.
    #[error("node count must be at least {minimum} (got {got})")]
    NodeCountTooSmall {
        /// Node count supplied by the caller.
        got: usize,
        /// Smallest accepted node count.
        minimum: usize,
    },
    /// The anchor step needs two free slots on node 0.
    #[error("max degree must be at least {minimum} (got {got})")]
    MaxDegreeTooSmall {
        /// Max degree supplied by the caller.
        got: usize,
        /// Smallest accepted max degree.
        minimum: usize,
    },
    /// Node 0 would need more hub neighbours than the interior can supply.
    #[error(
        "max degree {max_degree} needs {hubs} hub node(s) but only {interior} interior node(s) \
         exist for {node_count} nodes"
    )]
    HubSampleExceedsInterior {
        /// Node count supplied by the caller.
        node_count: usize,
        /// Max degree supplied by the caller.
        max_degree: usize,
        /// Hub picks required (`max_degree - 2`).
        hubs: usize,
        /// Interior candidates available (`node_count - 3`).
        interior: usize,
    },
}

/// Error type produced when configuring or running graph generation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphGenError {
    /// The requested node count and max degree cannot be generated.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
}

define_error_codes! {
    /// Stable codes describing [`ConfigurationError`] variants.
    enum ConfigurationErrorCode for ConfigurationError {
        /// The graph needs distinct first and last nodes.
        NodeCountTooSmall => NodeCountTooSmall { .. } => "GRAPHGEN_NODE_COUNT_TOO_SMALL",
        /// The anchor step needs two free slots on node 0.
        MaxDegreeTooSmall => MaxDegreeTooSmall { .. } => "GRAPHGEN_MAX_DEGREE_TOO_SMALL",
        /// Node 0 would need more hub neighbours than the interior can supply.
        HubSampleExceedsInterior => HubSampleExceedsInterior { .. } => "GRAPHGEN_HUB_SAMPLE_EXCEEDS_INTERIOR",
    }
}

define_error_codes! {
    /// Stable codes describing [`GraphGenError`] variants.
    enum GraphGenErrorCode for GraphGenError {
        /// The requested node count and max degree cannot be generated.
        InvalidConfiguration => InvalidConfiguration(..) => "GRAPHGEN_INVALID_CONFIGURATION",
    }
}

impl GraphGenError {
    /// Retrieve the inner [`ConfigurationErrorCode`] when the configuration
    /// was rejected.
    #[must_use]
    pub const fn configuration_code(&self) -> Option<ConfigurationErrorCode> {
        match self {
            Self::InvalidConfiguration(reason) => Some(reason.code()),
        }
    }
}

/// An error produced while reading an adjacency-list file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FormatError {
    /// Reading from the underlying source failed.
    #[error("failed to read adjacency list: {0}")]
    Io(#[from] io::Error),
    /// One of the three header lines was absent.
    #[error("adjacency list is missing the `{field}` header line")]
    MissingHeader {
        /// Header field that could not be read.
        field: &'static str,
    },
    /// The max-degree header line was not a decimal integer.
    #[error("max degree header `{raw}` is not a non-negative integer")]
    InvalidMaxDegree {
        /// Raw header text.
        raw: String,
    },
    /// A node line did not contain the `:` separator.
    #[error("line {line} is missing the `:` separator")]
    MissingSeparator {
        /// One-based line number in the file.
        line: usize,
    },
    /// A label could not be decoded back into a node index.
    #[error("line {line} contains invalid identifier `{label}`")]
    InvalidIdentifier {
        /// One-based line number in the file.
        line: usize,
        /// Offending label.
        label: String,
    },
    /// A node line did not describe the node expected at that position.
    #[error("line {line} defines `{found}` but `{expected}` was expected")]
    UnexpectedNode {
        /// One-based line number in the file.
        line: usize,
        /// Label expected from the line ordinal.
        expected: String,
        /// Label found on the line.
        found: String,
    },
    /// A neighbour label referenced a node outside the graph.
    #[error("node `{node}` references unknown neighbour `{neighbour}`")]
    UnknownNeighbour {
        /// Node that owns the neighbour list.
        node: String,
        /// Neighbour label that did not resolve.
        neighbour: String,
    },
    /// A node listed itself as a neighbour.
    #[error("node `{node}` lists itself as a neighbour")]
    SelfReference {
        /// Node that references itself.
        node: String,
    },
    /// A neighbour appeared more than once in a single list.
    #[error("node `{node}` lists neighbour `{neighbour}` more than once")]
    DuplicateNeighbour {
        /// Node that owns the neighbour list.
        node: String,
        /// Repeated neighbour label.
        neighbour: String,
    },
    /// A node listed more neighbours than the declared bound.
    #[error("node `{node}` has degree {degree}, exceeding max degree {max_degree}")]
    DegreeExceeded {
        /// Node whose list is too long.
        node: String,
        /// Number of neighbours listed.
        degree: usize,
        /// Declared max degree.
        max_degree: usize,
    },
    /// An edge was listed from one side only.
    #[error("edge `{from}` -> `{to}` has no reverse entry")]
    OneWayEdge {
        /// Node listing the edge.
        from: String,
        /// Node missing the reverse entry.
        to: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`FormatError`] variants.
    enum FormatErrorCode for FormatError {
        /// Reading from the underlying source failed.
        Io => Io(..) => "FORMAT_IO",
        /// One of the three header lines was absent.
        MissingHeader => MissingHeader { .. } => "FORMAT_MISSING_HEADER",
        /// The max-degree header line was not a decimal integer.
        InvalidMaxDegree => InvalidMaxDegree { .. } => "FORMAT_INVALID_MAX_DEGREE",
        /// A node line did not contain the `:` separator.
        MissingSeparator => MissingSeparator { .. } => "FORMAT_MISSING_SEPARATOR",
        /// A label could not be decoded back into a node index.
        InvalidIdentifier => InvalidIdentifier { .. } => "FORMAT_INVALID_IDENTIFIER",
        /// A node line did not describe the node expected at that position.
        UnexpectedNode => UnexpectedNode { .. } => "FORMAT_UNEXPECTED_NODE",
        /// A neighbour label referenced a node outside the graph.
        UnknownNeighbour => UnknownNeighbour { .. } => "FORMAT_UNKNOWN_NEIGHBOUR",
        /// A node listed itself as a neighbour.
        SelfReference => SelfReference { .. } => "FORMAT_SELF_REFERENCE",
        /// A neighbour appeared more than once in a single list.
        DuplicateNeighbour => DuplicateNeighbour { .. } => "FORMAT_DUPLICATE_NEIGHBOUR",
        /// A node listed more neighbours than the declared bound.
        DegreeExceeded => DegreeExceeded { .. } => "FORMAT_DEGREE_EXCEEDED",
        /// An edge was listed from one side only.
        OneWayEdge => OneWayEdge { .. } => "FORMAT_ONE_WAY_EDGE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphGenError>;
