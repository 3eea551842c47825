//! Fluent API for building figures in code.

use crate::types::{Color, GraphError, GraphResult};

use super::{Figure, FigureGraph};

/// Fluent builder for constructing a [`FigureGraph`] without figure text.
///
/// Vertices and edges are recorded eagerly but validated only when
/// [`build`](Self::build) or [`build_figure`](Self::build_figure) runs, so
/// construction code can chain freely and name vertices before they exist.
pub struct GraphBuilder {
    vertices: Vec<(Color, i64, i64)>,
    edges: Vec<(usize, usize)>,
    start: Option<(usize, Color)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            start: None,
        }
    }

    /// Declare the next vertex, returning its prospective index.
    pub fn vertex(&mut self, color: Color, x: i64, y: i64) -> usize {
        let index = self.vertices.len();
        self.vertices.push((color, x, y));
        index
    }

    /// Record an undirected edge between two vertex indices.
    pub fn edge(&mut self, u: usize, v: usize) -> &mut Self {
        self.edges.push((u, v));
        self
    }

    /// Designate the start vertex and fill color.
    pub fn start(&mut self, index: usize, color: Color) -> &mut Self {
        self.start = Some((index, color));
        self
    }

    /// Build the graph, validating coordinates and edges in declaration order.
    /// Any start designation is ignored here; use [`build_figure`](Self::build_figure)
    /// to keep it.
    pub fn build(self) -> GraphResult<FigureGraph> {
        let mut graph = FigureGraph::new();
        for (color, x, y) in self.vertices {
            graph.add_vertex(color, x, y)?;
        }
        for (u, v) in self.edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Build the complete figure. Requires a start designation naming a
    /// declared vertex.
    pub fn build_figure(self) -> GraphResult<Figure> {
        let (start, color) = self.start.ok_or(GraphError::MissingStart)?;
        let graph = self.build()?;
        if start >= graph.vertex_count() {
            return Err(GraphError::StartNotFound(start));
        }
        Ok(Figure {
            graph,
            start,
            color,
        })
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
