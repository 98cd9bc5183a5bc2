use std::fmt;

use thiserror::Error;

use crate::point::GeoPoint;

/// Convenient result alias for the georoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a route request could not produce a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateReason {
    /// Start and end are the same vertex.
    SameEndpoints,
    /// No sequence of edges joins start and end.
    Unreachable,
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            DegenerateReason::SameEndpoints => "start and end are the same point",
            DegenerateReason::Unreachable => "points are not connected",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the number of vertices supplied differs from the announced count.
    #[error("graph announced {expected} vertices but {actual} were supplied")]
    VertexCountMismatch { expected: usize, actual: usize },

    /// Raised when the number of edges supplied differs from the announced count.
    #[error("graph announced {expected} edges but {actual} were supplied")]
    EdgeCountMismatch { expected: usize, actual: usize },

    /// Raised when a vertex has a NaN or infinite coordinate.
    #[error("vertex {index} has non-finite coordinates {point}")]
    NonFiniteVertex { index: usize, point: GeoPoint },

    /// Raised when an edge references a vertex slot that does not exist.
    #[error("edge {edge} references vertex {index}, but the graph has {vertex_count} vertices")]
    EdgeIndexOutOfRange {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },

    /// Raised when a `.graph` file is malformed.
    #[error("invalid graph data at line {line}: {message}")]
    GraphFormat { line: usize, message: String },

    /// Raised when a places table yields no usable rows.
    #[error("invalid places data: {message}")]
    PlaceFormat { message: String },

    /// Raised when routing between two points is impossible or meaningless.
    #[error("no route from {start} to {end}: {reason}")]
    DegenerateRoute {
        start: GeoPoint,
        end: GeoPoint,
        reason: DegenerateReason,
    },

    /// Raised when a place label could not be found in the lookup table.
    #[error("unknown place: {name}{}", format_suggestions(.suggestions))]
    UnknownPlace {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a query needs a vertex but the graph has none.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn graph_format(line: usize, message: impl Into<String>) -> Self {
        Error::GraphFormat {
            line,
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
