//! Core graph structure: colored vertices plus the coordinate index.

use crate::index::CoordIndex;
use crate::types::{Color, GraphError, GraphResult, Vertex, PALETTE};

/// The in-memory figure graph holding colored vertices and their adjacency.
///
/// Vertex indices are contiguous from 0 and double as positions in the
/// backing vector. Edges are undirected: every edge appears in both
/// endpoints' neighbor lists. Traversals mutate `visited`, `color`, and
/// `prev_color` in place and never undo those writes; clone the graph or
/// re-parse the figure to traverse again from a clean slate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureGraph {
    /// All vertices; position in the vector equals `Vertex::index`.
    vertices: Vec<Vertex>,
    /// Coordinate index: (x, y) -> vertex index.
    coords: CoordIndex,
}

impl FigureGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            coords: CoordIndex::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges.len()).sum::<usize>() / 2
    }

    /// Get a vertex by index (immutable).
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Get a vertex by index (mutable).
    pub fn vertex_mut(&mut self, index: usize) -> Option<&mut Vertex> {
        self.vertices.get_mut(index)
    }

    /// All vertices in index order (immutable slice).
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Neighbor indices of a vertex, in first-mention order.
    /// Returns an empty slice for an unknown index.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.vertices
            .get(index)
            .map(|v| v.edges.as_slice())
            .unwrap_or(&[])
    }

    /// Look up the vertex occupying the given coordinates.
    pub fn at(&self, x: i64, y: i64) -> Option<usize> {
        self.coords.get(x, y)
    }

    /// Add a vertex, returns the assigned index.
    ///
    /// Coordinates must be unoccupied; indices are assigned sequentially in
    /// call order.
    pub fn add_vertex(&mut self, color: Color, x: i64, y: i64) -> GraphResult<usize> {
        if let Some(by) = self.coords.get(x, y) {
            return Err(GraphError::CoordinateTaken { x, y, by });
        }
        let index = self.vertices.len();
        self.coords.insert(x, y, index);
        self.vertices.push(Vertex::new(index, color, x, y));
        Ok(index)
    }

    /// Add an undirected edge between two existing vertices.
    ///
    /// Both neighbor lists are updated; inserting an edge that already
    /// exists is a no-op, so the lists stay duplicate-free and record the
    /// order in which distinct edges were first added.
    pub fn add_edge(&mut self, u: usize, v: usize) -> GraphResult<()> {
        if u == v {
            return Err(GraphError::SelfEdge(u));
        }
        if u >= self.vertices.len() {
            return Err(GraphError::VertexNotFound(u));
        }
        if v >= self.vertices.len() {
            return Err(GraphError::VertexNotFound(v));
        }

        if !self.vertices[u].edges.contains(&v) {
            self.vertices[u].edges.push(v);
        }
        if !self.vertices[v].edges.contains(&u) {
            self.vertices[v].edges.push(u);
        }
        Ok(())
    }

    /// Count vertices per palette color, in palette order.
    pub fn color_counts(&self) -> Vec<(Color, usize)> {
        PALETTE
            .iter()
            .map(|&color| {
                let count = self.vertices.iter().filter(|v| v.color == color).count();
                (color, count)
            })
            .collect()
    }

    /// Mark a vertex visited without touching its color.
    pub(crate) fn mark_visited(&mut self, index: usize) {
        if let Some(v) = self.vertices.get_mut(index) {
            v.visited = true;
        }
    }

    /// Record a recoloring visit: capture `prev_color` on first visit, then
    /// rewrite the color to `fill`. `visited` and `prev_color` are never
    /// rewound by later calls.
    pub(crate) fn record_visit(&mut self, index: usize, fill: Color) {
        if let Some(v) = self.vertices.get_mut(index) {
            if !v.visited {
                v.prev_color = Some(v.color);
                v.visited = true;
            }
            v.color = fill;
        }
    }
}

impl Default for FigureGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete figure: the graph plus its start designation.
///
/// This is what a parse yields and what the traversal layer consumes;
/// `start` always names an existing vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    /// The vertex graph.
    pub graph: FigureGraph,
    /// Index of the designated start vertex.
    pub start: usize,
    /// The color the fill operates over.
    pub color: Color,
}
