//! flood-graph: flood-fill traversal over colored figure graphs.
//!
//! Parses line-oriented figure text into a graph of colored vertices at
//! integer coordinates, derives adjacency matrices, and runs lazy
//! breadth-first or depth-first fills over same-colored regions.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{is_breadth_first, is_depth_first, FillEngine, FillParams, FillReport};
pub use format::{FigureParser, FigureWriter};
pub use graph::{
    bfs, build_matrix, dfs, AdjacencyMatrix, Bfs, Dfs, Figure, FigureGraph, GraphBuilder, Strategy,
    VisitEvent,
};
pub use index::CoordIndex;
pub use types::{Color, GraphError, GraphResult, Vertex, PALETTE};
