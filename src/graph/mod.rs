//! In-memory figure graph operations: the core data structure and algorithms.

pub mod builder;
pub mod figure_graph;
pub mod matrix;
pub mod traversal;

pub use builder::GraphBuilder;
pub use figure_graph::{Figure, FigureGraph};
pub use matrix::{build_matrix, AdjacencyMatrix};
pub use traversal::{bfs, dfs, Bfs, Dfs, Strategy, VisitEvent};
