//! Fill executor: drives one traversal to completion and reports on it.

use serde::Serialize;

use crate::graph::traversal::{bfs, dfs, Strategy, VisitEvent};
use crate::graph::FigureGraph;
use crate::types::{Color, GraphResult};

/// Parameters for a fill run.
pub struct FillParams {
    /// Starting vertex index.
    pub start: usize,
    /// The color the fill operates over (and, under DFS, repaints with).
    pub color: Color,
    /// Which traversal drives the fill.
    pub strategy: Strategy,
}

/// Result of a completed fill run.
#[derive(Debug, Clone, Serialize)]
pub struct FillReport {
    /// The strategy that ran.
    pub strategy: Strategy,
    /// The start vertex.
    pub start: usize,
    /// The fill color.
    pub color: Color,
    /// Every visit, in emission order.
    pub visits: Vec<VisitEvent>,
    /// The deepest layer (BFS) or longest path (DFS) reached.
    pub max_depth: u32,
}

impl FillReport {
    /// Number of vertices the fill claimed.
    pub fn region_size(&self) -> usize {
        self.visits.len()
    }

    /// The visited indices in emission order.
    pub fn order(&self) -> Vec<usize> {
        self.visits.iter().map(|e| e.index).collect()
    }
}

/// The fill engine runs traversals to completion.
pub struct FillEngine;

impl FillEngine {
    /// Create a new fill engine.
    pub fn new() -> Self {
        Self
    }

    /// Run one fill over the graph to exhaustion.
    ///
    /// The graph keeps whatever the run wrote: visited flags, and under DFS
    /// the repainted colors and `prev_color` captures. Re-parse the figure
    /// before running another fill that should see a clean graph.
    pub fn fill(&self, graph: &mut FigureGraph, params: FillParams) -> GraphResult<FillReport> {
        let visits: Vec<VisitEvent> = match params.strategy {
            Strategy::Bfs => bfs(graph, params.start, params.color)?.collect(),
            Strategy::Dfs => dfs(graph, params.start, params.color)?.collect(),
        };
        let max_depth = visits.iter().map(|e| e.depth).max().unwrap_or(0);

        Ok(FillReport {
            strategy: params.strategy,
            start: params.start,
            color: params.color,
            visits,
            max_depth,
        })
    }
}

impl Default for FillEngine {
    fn default() -> Self {
        Self::new()
    }
}
