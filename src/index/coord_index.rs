//! Coordinate index mapping each (x, y) position to its vertex.

use std::collections::HashMap;

use crate::types::Vertex;

/// Maps each occupied (x, y) coordinate pair to the vertex index holding it.
///
/// Coordinates are immutable after construction, so the index never goes
/// stale; it exists for duplicate detection during parsing and for point
/// lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordIndex {
    index: HashMap<(i64, i64), usize>,
}

impl CoordIndex {
    /// Create a new, empty coordinate index.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
        }
    }

    /// Get the vertex index at the given coordinates, if occupied.
    pub fn get(&self, x: i64, y: i64) -> Option<usize> {
        self.index.get(&(x, y)).copied()
    }

    /// Insert a coordinate entry, returning the prior occupant if there was one.
    pub fn insert(&mut self, x: i64, y: i64, vertex: usize) -> Option<usize> {
        self.index.insert((x, y), vertex)
    }

    /// Rebuild the entire index from a slice of vertices.
    pub fn rebuild(&mut self, vertices: &[Vertex]) {
        self.index.clear();
        for v in vertices {
            self.index.insert((v.x, v.y), v.index);
        }
    }

    /// Clear the index.
    pub fn clear(&mut self) {
        self.index.clear();
    }

    /// Number of indexed coordinates.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Get a reference to the underlying map.
    pub fn inner(&self) -> &HashMap<(i64, i64), usize> {
        &self.index
    }
}

impl Default for CoordIndex {
    fn default() -> Self {
        Self::new()
    }
}
