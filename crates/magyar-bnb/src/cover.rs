// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Minimum vertex covers via König's construction.
//!
//! In a bipartite graph the smallest vertex set touching every edge has
//! exactly the size of a maximum matching. The construction inverts every
//! matched edge, walks reachability from the unmatched left vertices, and
//! reads the cover off the visited sets. The reachability search is
//! iterative with an explicit stack.

use crate::{graph::ZeroGraph, matching::Matching};
use fixedbitset::FixedBitSet;
use rustc_hash::FxHashSet;

/// A minimum vertex cover of a zero graph.
///
/// `l_minus` holds covered worker rows, `r_plus` covered task columns.
/// The two sets are disjoint index spaces; together they touch every edge
/// of the graph they were computed from, and their combined size equals the
/// maximum matching size (König duality).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexCover {
    l_minus: FxHashSet<usize>,
    r_plus: FxHashSet<usize>,
}

impl VertexCover {
    /// Constructs a cover from its two sides.
    #[inline]
    pub fn new(l_minus: FxHashSet<usize>, r_plus: FxHashSet<usize>) -> Self {
        Self { l_minus, r_plus }
    }

    /// Returns the covered worker rows.
    #[inline]
    pub fn l_minus(&self) -> &FxHashSet<usize> {
        &self.l_minus
    }

    /// Returns the covered task columns.
    #[inline]
    pub fn r_plus(&self) -> &FxHashSet<usize> {
        &self.r_plus
    }

    /// Returns `true` if the worker row is covered.
    #[inline]
    pub fn covers_row(&self, worker: usize) -> bool {
        self.l_minus.contains(&worker)
    }

    /// Returns `true` if the task column is covered.
    #[inline]
    pub fn covers_column(&self, task: usize) -> bool {
        self.r_plus.contains(&task)
    }

    /// Returns the total number of covered vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.l_minus.len() + self.r_plus.len()
    }
}

impl std::fmt::Display for VertexCover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rows: Vec<usize> = self.l_minus.iter().copied().collect();
        let mut columns: Vec<usize> = self.r_plus.iter().copied().collect();
        rows.sort_unstable();
        columns.sort_unstable();

        let join = |values: &[usize]| {
            values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        write!(f, "L-: {}\nR+: {}", join(&rows), join(&columns))
    }
}

/// Derives a minimum vertex cover from a maximum matching.
///
/// When the matching saturates every left vertex the cover is trivially
/// (all workers, ∅). Otherwise every matched edge's direction is inverted
/// on a copy of the graph, reachability is walked from every unmatched left
/// vertex, and the cover is read off: `l_minus` are the unvisited workers,
/// `r_plus` the visited matched task columns.
///
/// `matching` must be a maximum matching of `graph`; the result then
/// satisfies `cover.size() == matching.len()`.
pub fn find_min_vertex_cover(graph: &ZeroGraph, matching: &Matching) -> VertexCover {
    let num_workers = graph.num_workers();

    // A saturating matching needs no search: every edge leaves the left side.
    if matching.saturates_left_side(num_workers) {
        return VertexCover::new((0..num_workers).collect(), FxHashSet::default());
    }

    // Flip matched edges on a copy; the shared graph must stay intact.
    let mut inverted = graph.clone();
    for (right_vertex, left_vertex) in matching.iter() {
        inverted.invert_matched_edge(left_vertex, right_vertex);
    }

    let matched_lefts: FxHashSet<usize> = matching.lefts().collect();
    let mut visited = FixedBitSet::with_capacity(graph.num_vertices());
    let mut stack: Vec<usize> = graph
        .left_vertices()
        .filter(|left| !matched_lefts.contains(left))
        .collect();

    while let Some(vertex) = stack.pop() {
        if visited.contains(vertex) {
            continue;
        }
        visited.insert(vertex);

        for &neighbor in inverted.neighbors(vertex) {
            if !visited.contains(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    let l_minus: FxHashSet<usize> = graph
        .left_vertices()
        .filter(|&worker| !visited.contains(worker))
        .collect();

    let r_plus: FxHashSet<usize> = matching
        .iter()
        .filter(|&(right_vertex, _)| visited.contains(right_vertex))
        .map(|(right_vertex, _)| graph.task_of(right_vertex))
        .collect();

    VertexCover::new(l_minus, r_plus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::maximum_matching;
    use magyar_model::matrix::CostMatrix;

    fn graph_from(rows: &[Vec<i64>]) -> ZeroGraph {
        ZeroGraph::from_matrix(&CostMatrix::from_rows(rows))
    }

    fn assert_covers_all_edges(cover: &VertexCover, graph: &ZeroGraph) {
        for left in graph.left_vertices() {
            for &right in graph.neighbors(left) {
                let task = graph.task_of(right);
                assert!(
                    cover.covers_row(left) || cover.covers_column(task),
                    "edge {} -> {} not covered",
                    left,
                    right
                );
            }
        }
    }

    #[test]
    fn test_saturating_matching_gives_trivial_cover() {
        let g = graph_from(&[vec![0, 5], vec![5, 0]]);
        let m = maximum_matching(&g);
        assert_eq!(m.len(), 2);

        let cover = find_min_vertex_cover(&g, &m);
        assert_eq!(cover.size(), m.len());
        assert!(cover.covers_row(0));
        assert!(cover.covers_row(1));
        assert!(cover.r_plus().is_empty());
        assert_covers_all_edges(&cover, &g);
    }

    #[test]
    fn test_koenig_duality_on_imperfect_graph() {
        // Both workers share a single zero column.
        let g = graph_from(&[vec![0, 7], vec![0, 9]]);
        let m = maximum_matching(&g);
        assert_eq!(m.len(), 1);

        let cover = find_min_vertex_cover(&g, &m);
        assert_eq!(cover.size(), m.len());
        assert_covers_all_edges(&cover, &g);

        // The shared column is the only minimum cover.
        assert!(cover.covers_column(0));
        assert!(cover.l_minus().is_empty());
    }

    #[test]
    fn test_koenig_duality_on_mixed_graph() {
        // Workers 0 and 1 both reach only task 0; worker 2 reaches tasks 1
        // and 2. Maximum matching has size 2.
        let g = graph_from(&[vec![0, 5, 5], vec![0, 5, 5], vec![5, 0, 0]]);
        let m = maximum_matching(&g);
        assert_eq!(m.len(), 2);

        let cover = find_min_vertex_cover(&g, &m);
        assert_eq!(cover.size(), m.len());
        assert_covers_all_edges(&cover, &g);

        // Task 0 must be covered (it alone touches two workers' edges), and
        // worker 2 must be covered to reach its two columns cheaply.
        assert!(cover.covers_column(0));
        assert!(cover.covers_row(2));
    }

    #[test]
    fn test_cover_does_not_mutate_input_graph() {
        let g = graph_from(&[vec![0, 7], vec![0, 9]]);
        let edges_before = g.num_edges();
        let m = maximum_matching(&g);

        let _ = find_min_vertex_cover(&g, &m);
        assert_eq!(g.num_edges(), edges_before);
    }

    #[test]
    fn test_display_lists_sorted_sides() {
        let mut l = FxHashSet::default();
        l.insert(2);
        l.insert(0);
        let mut r = FxHashSet::default();
        r.insert(1);

        let cover = VertexCover::new(l, r);
        assert_eq!(format!("{}", cover), "L-: 0, 2\nR+: 1");
    }
}
