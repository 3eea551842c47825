//! Dense adjacency matrix derived from a figure graph.

use crate::types::{GraphError, GraphResult};

use super::FigureGraph;

/// An N x N 0/1 adjacency matrix in vertex index order, stored row-major.
///
/// `cells[i][j]` is 1 exactly when vertex j appears in vertex i's neighbor
/// list. A well-formed graph yields a symmetric matrix with a zero diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.n
    }

    /// Cell lookup. Out-of-range indices read as 0.
    pub fn get(&self, i: usize, j: usize) -> bool {
        if i >= self.n || j >= self.n {
            return false;
        }
        self.cells[i * self.n + j] == 1
    }

    /// One row as a 0/1 slice.
    pub fn row(&self, i: usize) -> &[u8] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    /// Iterate over rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.n.max(1))
    }

    /// Copy out as nested vectors, the shape fixture files use.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Whether the matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.cells[i * self.n + j] != self.cells[j * self.n + i] {
                    return false;
                }
            }
        }
        true
    }
}

impl std::fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.n {
            let row: Vec<String> = self.row(i).iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

/// Derive the adjacency matrix of a graph.
///
/// This is a pure read: traversal state is neither consulted nor touched,
/// so it can run before, between, or after fills with identical output.
/// A neighbor list that breaks the symmetry or no-self-loop invariants
/// fails with `AsymmetricEdge` / `SelfEdge` rather than producing a matrix
/// that misrepresents the graph.
pub fn build_matrix(graph: &FigureGraph) -> GraphResult<AdjacencyMatrix> {
    let n = graph.vertex_count();
    let mut cells = vec![0u8; n * n];

    for v in graph.vertices() {
        for &neighbor in &v.edges {
            if neighbor == v.index {
                return Err(GraphError::SelfEdge(v.index));
            }
            if neighbor >= n {
                return Err(GraphError::VertexNotFound(neighbor));
            }
            if !graph.neighbors(neighbor).contains(&v.index) {
                return Err(GraphError::AsymmetricEdge {
                    from: v.index,
                    to: neighbor,
                });
            }
            cells[v.index * n + neighbor] = 1;
        }
    }

    Ok(AdjacencyMatrix { n, cells })
}
