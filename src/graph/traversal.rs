//! Region traversal: lazy breadth-first and depth-first flood fill.

use std::collections::VecDeque;

use log::{debug, trace};
use serde::Serialize;

use crate::types::{Color, GraphError, GraphResult};

use super::FigureGraph;

/// Traversal strategy for a fill run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Breadth-first: visit the region layer by layer.
    Bfs,
    /// Depth-first: exhaust each branch before returning to its siblings.
    Dfs,
}

impl Strategy {
    /// Return the lowercase name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }

    /// Parse a strategy from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" => Some(Self::Bfs),
            "dfs" => Some(Self::Dfs),
            _ => None,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single visit emitted by a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisitEvent {
    /// Index of the visited vertex.
    pub index: usize,
    /// Steps from the start: the BFS layer number, or the DFS path length.
    pub depth: u32,
}

/// Begin a breadth-first fill over the region of `color` reachable from `start`.
///
/// The returned iterator emits one [`VisitEvent`] per vertex, in layer order:
/// all vertices at distance d before any at distance d + 1, ties broken by
/// the order edges were first recorded. The start vertex is emitted first
/// regardless of its own color; from there the frontier only crosses
/// neighbors whose current color equals `color`. Each vertex is claimed
/// (marked visited) the moment it joins the queue, so no vertex is emitted
/// twice. The graph is untouched until the first `next()` call, and the
/// sequence is finite and cannot be restarted: traverse again by re-parsing
/// the figure.
pub fn bfs(graph: &mut FigureGraph, start: usize, color: Color) -> GraphResult<Bfs<'_>> {
    if graph.vertex(start).is_none() {
        return Err(GraphError::StartNotFound(start));
    }
    debug!("bfs from vertex {} over color {}", start, color);
    Ok(Bfs {
        graph,
        color,
        origin: Some(start),
        queue: VecDeque::new(),
    })
}

/// Breadth-first fill in progress. Created by [`bfs`].
pub struct Bfs<'g> {
    graph: &'g mut FigureGraph,
    color: Color,
    origin: Option<usize>,
    queue: VecDeque<(usize, u32)>,
}

impl Iterator for Bfs<'_> {
    type Item = VisitEvent;

    fn next(&mut self) -> Option<VisitEvent> {
        if let Some(origin) = self.origin.take() {
            self.graph.mark_visited(origin);
            self.queue.push_back((origin, 0));
        }

        let (index, depth) = self.queue.pop_front()?;
        let color = self.color;
        let neighbors: Vec<usize> = self.graph.neighbors(index).to_vec();
        for neighbor in neighbors {
            let eligible = self
                .graph
                .vertex(neighbor)
                .is_some_and(|v| !v.visited && v.color == color);
            if eligible {
                self.graph.mark_visited(neighbor);
                self.queue.push_back((neighbor, depth + 1));
            }
        }

        trace!("bfs visit {} depth {}", index, depth);
        Some(VisitEvent { index, depth })
    }
}

/// Begin a depth-first fill over the region of `color` reachable from `start`.
///
/// The returned iterator emits one [`VisitEvent`] per vertex. Visiting a
/// vertex captures its `prev_color`, repaints it with `color`, and marks it
/// visited; expansion then follows the first eligible neighbor (unvisited,
/// current color equal to `color`) all the way down before any sibling is
/// considered, using an explicit stack of edge cursors. A vertex leaves the
/// stack only once its whole neighbor list has been examined, so a finished
/// subtree leaves no eligible neighbor behind. As with [`bfs`], the graph is
/// untouched until the first `next()` call and the sequence cannot be
/// restarted.
pub fn dfs(graph: &mut FigureGraph, start: usize, color: Color) -> GraphResult<Dfs<'_>> {
    if graph.vertex(start).is_none() {
        return Err(GraphError::StartNotFound(start));
    }
    debug!("dfs from vertex {} over color {}", start, color);
    Ok(Dfs {
        graph,
        color,
        origin: Some(start),
        stack: Vec::new(),
    })
}

/// One suspended vertex on the DFS stack: which vertex, and how far its
/// neighbor list has been examined.
struct Frame {
    index: usize,
    next_edge: usize,
    depth: u32,
}

/// Depth-first fill in progress. Created by [`dfs`].
pub struct Dfs<'g> {
    graph: &'g mut FigureGraph,
    color: Color,
    origin: Option<usize>,
    stack: Vec<Frame>,
}

impl Iterator for Dfs<'_> {
    type Item = VisitEvent;

    fn next(&mut self) -> Option<VisitEvent> {
        if let Some(origin) = self.origin.take() {
            self.graph.record_visit(origin, self.color);
            self.stack.push(Frame {
                index: origin,
                next_edge: 0,
                depth: 0,
            });
            trace!("dfs visit {} depth 0", origin);
            return Some(VisitEvent {
                index: origin,
                depth: 0,
            });
        }

        let color = self.color;
        while let Some(frame) = self.stack.last_mut() {
            let index = frame.index;
            let depth = frame.depth;
            if frame.next_edge >= self.graph.neighbors(index).len() {
                self.stack.pop();
                continue;
            }
            let neighbor = self.graph.neighbors(index)[frame.next_edge];
            frame.next_edge += 1;

            let eligible = self
                .graph
                .vertex(neighbor)
                .is_some_and(|v| !v.visited && v.color == color);
            if eligible {
                self.graph.record_visit(neighbor, color);
                self.stack.push(Frame {
                    index: neighbor,
                    next_edge: 0,
                    depth: depth + 1,
                });
                trace!("dfs visit {} depth {}", neighbor, depth + 1);
                return Some(VisitEvent {
                    index: neighbor,
                    depth: depth + 1,
                });
            }
        }
        None
    }
}
