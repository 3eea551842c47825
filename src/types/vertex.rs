//! The vertex struct, the atomic unit of a figure graph.

use serde::Serialize;

use super::Color;

/// A single figure vertex with its position, paint, and traversal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex {
    /// Index in the graph (contiguous from 0, assigned in declaration order).
    pub index: usize,
    /// Current color. DFS rewrites this when it visits the vertex.
    pub color: Color,
    /// Figure x coordinate. Coordinates identify a vertex but never imply edges.
    pub x: i64,
    /// Figure y coordinate.
    pub y: i64,
    /// Neighbor indices in first-mention order. No duplicates, no self entries;
    /// the graph keeps the relation symmetric.
    pub edges: Vec<usize>,
    /// Whether a traversal has claimed this vertex. Never reset.
    pub visited: bool,
    /// The color this vertex had just before its first visit recolored it.
    /// None until then.
    pub prev_color: Option<Color>,
}

impl Vertex {
    /// Create an unvisited vertex with no edges.
    pub fn new(index: usize, color: Color, x: i64, y: i64) -> Self {
        Self {
            index,
            color,
            x,
            y,
            edges: Vec::new(),
            visited: false,
            prev_color: None,
        }
    }

    /// Number of incident edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}
