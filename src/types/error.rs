//! Error types for the flood-graph library.

use thiserror::Error;

/// All errors that can occur in the flood-graph library.
///
/// Parse-time variants carry the 1-based line of figure text that triggered
/// them. `AsymmetricEdge` reports a broken internal invariant rather than bad
/// input; it cannot arise from parsed figures.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A figure line that does not match any record shape.
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A color name outside the palette.
    #[error("Unknown color {name:?} on line {line}")]
    UnknownColor { line: usize, name: String },

    /// A vertex record whose explicit index disagrees with its position.
    #[error("Vertex index mismatch on line {line}: found {found}, expected {expected}")]
    IndexMismatch {
        line: usize,
        found: usize,
        expected: usize,
    },

    /// Two vertex records claiming the same coordinates.
    #[error("Duplicate coordinates ({x}, {y}) on line {line}; first declared by vertex {first}")]
    DuplicateCoordinate {
        line: usize,
        x: i64,
        y: i64,
        first: usize,
    },

    /// An edge naming a vertex index no record declares.
    #[error("Edge to undeclared vertex {index} on line {line}")]
    UndeclaredNeighbor { line: usize, index: usize },

    /// Figure text with no start record.
    #[error("No start record in figure")]
    MissingStart,

    /// More than one start record.
    #[error("Duplicate start record on line {line}; first on line {first}")]
    DuplicateStart { line: usize, first: usize },

    /// A start record naming a vertex index past the declared range.
    #[error("Start index {index} on line {line} out of range for {count} vertices")]
    StartOutOfRange {
        line: usize,
        index: usize,
        count: usize,
    },

    /// Vertex not found by index.
    #[error("Vertex {0} not found")]
    VertexNotFound(usize),

    /// Self-edge not allowed.
    #[error("Self-edge not allowed on vertex {0}")]
    SelfEdge(usize),

    /// Coordinates already occupied by another vertex.
    #[error("Coordinates ({x}, {y}) already taken by vertex {by}")]
    CoordinateTaken { x: i64, y: i64, by: usize },

    /// Coordinate lookup found nothing.
    #[error("No vertex at ({x}, {y})")]
    NoVertexAt { x: i64, y: i64 },

    /// Traversal start vertex does not exist.
    #[error("Traversal start vertex {0} not found")]
    StartNotFound(usize),

    /// Adjacency stored in one direction only.
    #[error("Asymmetric edge: {from} lists {to} but not vice versa")]
    AsymmetricEdge { from: usize, to: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for flood-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
