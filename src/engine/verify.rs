//! Read-only checks that a visit order really is breadth-first or depth-first.
//!
//! Both predicates recompute the reachable region from the graph's current
//! colors, so they expect the figure as parsed, before any traversal has
//! repainted or flagged it.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::FigureGraph;
use crate::types::Color;

/// Whether `order` is a valid breadth-first visit order for the region of
/// `color` reachable from `start`.
///
/// Valid means: starts at `start`, covers the region exactly once, and
/// never emits a vertex from a nearer layer after a farther one. The
/// within-layer order is free; any tie-break passes.
pub fn is_breadth_first(graph: &FigureGraph, start: usize, color: Color, order: &[usize]) -> bool {
    if graph.vertex(start).is_none() {
        return false;
    }
    let depths = region_depths(graph, start, color);

    if order.len() != depths.len() || order.first() != Some(&start) {
        return false;
    }
    let mut seen: HashSet<usize> = HashSet::new();
    for &index in order {
        if !depths.contains_key(&index) || !seen.insert(index) {
            return false;
        }
    }
    for pair in order.windows(2) {
        if depths[&pair[0]] > depths[&pair[1]] {
            return false;
        }
    }
    true
}

/// Whether `order` is a valid maximal-depth depth-first visit order for the
/// region of `color` reachable from `start`.
///
/// The order is replayed against the edge relation with an explicit stack:
/// each emitted vertex must extend the current branch or resume an ancestor
/// whose intervening frames are exhausted, and a frame may only be abandoned
/// once none of its neighbors is still claimable. Branch choice at each
/// vertex is free; any neighbor order passes.
pub fn is_depth_first(graph: &FigureGraph, start: usize, color: Color, order: &[usize]) -> bool {
    if graph.vertex(start).is_none() {
        return false;
    }
    let region = region_depths(graph, start, color);

    if order.len() != region.len() || order.first() != Some(&start) {
        return false;
    }

    let mut seen: HashSet<usize> = HashSet::new();
    let mut stack: Vec<usize> = Vec::new();
    seen.insert(start);
    stack.push(start);

    for &next in &order[1..] {
        if seen.contains(&next) || !region.contains_key(&next) {
            return false;
        }
        // Pop frames until one is adjacent to `next`. Popping past a frame
        // that still has a claimable neighbor would mean the traversal
        // turned back early, so that rejects the order.
        loop {
            let top = match stack.last() {
                Some(&t) => t,
                None => return false,
            };
            if graph.neighbors(top).contains(&next) {
                break;
            }
            if has_claimable_neighbor(graph, top, color, &seen) {
                return false;
            }
            stack.pop();
        }
        seen.insert(next);
        stack.push(next);
    }

    // The final unwind obeys the same rule: nothing claimable left behind.
    while let Some(top) = stack.pop() {
        if has_claimable_neighbor(graph, top, color, &seen) {
            return false;
        }
    }
    true
}

/// Layer number of every vertex in the region: the start plus everything
/// reachable from it across vertices currently painted `color`.
fn region_depths(graph: &FigureGraph, start: usize, color: Color) -> HashMap<usize, u32> {
    let mut depths: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(usize, u32)> = VecDeque::new();
    depths.insert(start, 0);
    queue.push_back((start, 0));

    while let Some((index, depth)) = queue.pop_front() {
        for &neighbor in graph.neighbors(index) {
            if depths.contains_key(&neighbor) {
                continue;
            }
            let in_region = graph.vertex(neighbor).is_some_and(|v| v.color == color);
            if in_region {
                depths.insert(neighbor, depth + 1);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }
    depths
}

fn has_claimable_neighbor(
    graph: &FigureGraph,
    index: usize,
    color: Color,
    seen: &HashSet<usize>,
) -> bool {
    graph.neighbors(index).iter().any(|&n| {
        !seen.contains(&n) && graph.vertex(n).is_some_and(|v| v.color == color)
    })
}
