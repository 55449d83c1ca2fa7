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

use magyar_model::{
    index::{TaskIndex, WorkerIndex},
    matrix::CostMatrix,
};
use num_traits::PrimInt;
use rustc_hash::FxHashSet;

/// The zero-cost bipartite graph of a reduced matrix.
///
/// Vertices are global ids: workers occupy `0..num_workers`, tasks occupy
/// `num_workers..num_workers + num_tasks`. An edge from worker `w` to task
/// vertex `num_workers + t` exists wherever the matrix cell `(w, t)` equals
/// the matrix's global minimum — after a reduction that minimum is zero, so
/// the graph captures *all* zero-cost pairings, never just one.
///
/// Edges are stored on the left side only. The right-side adjacency sets
/// stay empty until a cover computation inverts matched edges into them.
/// `Clone` deep-copies every adjacency set; callers clone before mutating a
/// graph that another frame still references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZeroGraph {
    num_workers: usize,
    num_tasks: usize,
    adjacency: Vec<FxHashSet<usize>>, // len = num_workers + num_tasks
}

impl ZeroGraph {
    /// Builds the zero graph of a matrix: one edge per cell equal to the
    /// global minimum. Deterministic given the matrix.
    pub fn from_matrix<T>(matrix: &CostMatrix<T>) -> Self
    where
        T: PrimInt,
    {
        let num_workers = matrix.num_workers();
        let num_tasks = matrix.num_tasks();
        let min = matrix.min_value();

        let mut adjacency = vec![FxHashSet::default(); num_workers + num_tasks];
        for w in 0..num_workers {
            for t in 0..num_tasks {
                // SAFETY: both loop bounds come from the matrix shape.
                let cost = unsafe { matrix.cost_unchecked(WorkerIndex::new(w), TaskIndex::new(t)) };
                if cost == min {
                    adjacency[w].insert(num_workers + t);
                }
            }
        }

        Self {
            num_workers,
            num_tasks,
            adjacency,
        }
    }

    /// Returns the number of left-side (worker) vertices.
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Returns the number of right-side (task) vertices.
    #[inline]
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Returns the total vertex count.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_workers + self.num_tasks
    }

    /// Returns the global id of the first right-side vertex.
    #[inline]
    pub fn first_right_vertex(&self) -> usize {
        self.num_workers
    }

    /// Translates a right-side vertex id back to its task column.
    #[inline]
    pub fn task_of(&self, right_vertex: usize) -> usize {
        debug_assert!(
            right_vertex >= self.num_workers && right_vertex < self.num_vertices(),
            "called `ZeroGraph::task_of` with a vertex outside the right side: {}",
            right_vertex
        );

        right_vertex - self.num_workers
    }

    /// Returns the adjacency set of a vertex.
    #[inline]
    pub fn neighbors(&self, vertex: usize) -> &FxHashSet<usize> {
        debug_assert!(
            vertex < self.num_vertices(),
            "called `ZeroGraph::neighbors` with vertex out of bounds: the len is {} but the index is {}",
            self.num_vertices(),
            vertex
        );

        &self.adjacency[vertex]
    }

    /// Iterates over the left-side vertex ids.
    #[inline]
    pub fn left_vertices(&self) -> std::ops::Range<usize> {
        0..self.num_workers
    }

    /// Returns the total number of stored edges.
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(FxHashSet::len).sum()
    }

    /// Removes the edge from `left_vertex` to `right_vertex`.
    #[inline]
    pub fn remove_edge(&mut self, left_vertex: usize, right_vertex: usize) {
        debug_assert!(
            self.adjacency[left_vertex].contains(&right_vertex),
            "called `ZeroGraph::remove_edge` with an absent edge: {} -> {}",
            left_vertex,
            right_vertex
        );

        self.adjacency[left_vertex].remove(&right_vertex);
    }

    /// Restricts `left_vertex` to a single neighbor, pinning the pairing
    /// during branch and bound.
    #[inline]
    pub fn restrict_left(&mut self, left_vertex: usize, right_vertex: usize) {
        debug_assert!(
            self.adjacency[left_vertex].contains(&right_vertex),
            "called `ZeroGraph::restrict_left` with an absent edge: {} -> {}",
            left_vertex,
            right_vertex
        );

        let mut pinned = FxHashSet::default();
        pinned.insert(right_vertex);
        self.adjacency[left_vertex] = pinned;
    }

    /// Reverses a matched edge so that reachability searches can walk it
    /// from the right side back to the left (König's construction).
    #[inline]
    pub fn invert_matched_edge(&mut self, left_vertex: usize, right_vertex: usize) {
        self.adjacency[left_vertex].remove(&right_vertex);
        self.adjacency[right_vertex].insert(left_vertex);
    }
}

impl std::fmt::Display for ZeroGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ZeroGraph(workers: {}, tasks: {}, edges: {})",
            self.num_workers,
            self.num_tasks,
            self.num_edges()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(rows: &[Vec<i64>]) -> ZeroGraph {
        ZeroGraph::from_matrix(&CostMatrix::from_rows(rows))
    }

    #[test]
    fn test_from_matrix_collects_all_minimum_cells() {
        // Minimum is 0, present at (0,0), (1,1) and (1,2).
        let g = graph_from(&[vec![0, 2, 3], vec![5, 0, 0], vec![4, 2, 9]]);

        assert_eq!(g.num_workers(), 3);
        assert_eq!(g.num_tasks(), 3);
        assert_eq!(g.num_vertices(), 6);
        assert_eq!(g.num_edges(), 3);

        assert!(g.neighbors(0).contains(&3));
        assert!(g.neighbors(1).contains(&4));
        assert!(g.neighbors(1).contains(&5));
        assert!(g.neighbors(2).is_empty());
    }

    #[test]
    fn test_from_matrix_uses_global_minimum_not_zero() {
        // No zero cell; the minimum 1 defines the edges.
        let g = graph_from(&[vec![1, 2], vec![3, 1]]);

        assert_eq!(g.num_edges(), 2);
        assert!(g.neighbors(0).contains(&2));
        assert!(g.neighbors(1).contains(&3));
    }

    #[test]
    fn test_task_of_translates_right_vertices() {
        let g = graph_from(&[vec![0, 1], vec![1, 0]]);
        assert_eq!(g.first_right_vertex(), 2);
        assert_eq!(g.task_of(2), 0);
        assert_eq!(g.task_of(3), 1);
    }

    #[test]
    fn test_remove_and_restrict() {
        let mut g = graph_from(&[vec![0, 0], vec![0, 0]]);
        assert_eq!(g.num_edges(), 4);

        g.remove_edge(0, 2);
        assert_eq!(g.num_edges(), 3);
        assert!(!g.neighbors(0).contains(&2));

        g.restrict_left(1, 3);
        assert_eq!(g.neighbors(1).len(), 1);
        assert!(g.neighbors(1).contains(&3));
    }

    #[test]
    fn test_invert_matched_edge_moves_adjacency() {
        let mut g = graph_from(&[vec![0, 1], vec![1, 0]]);
        g.invert_matched_edge(0, 2);

        assert!(!g.neighbors(0).contains(&2));
        assert!(g.neighbors(2).contains(&0));
    }

    #[test]
    fn test_clone_is_deep() {
        let g = graph_from(&[vec![0, 1], vec![1, 0]]);
        let mut copy = g.clone();
        copy.remove_edge(0, 2);

        // The original is untouched by the clone's mutation.
        assert!(g.neighbors(0).contains(&2));
        assert!(!copy.neighbors(0).contains(&2));
    }

    #[test]
    fn test_display_reports_shape() {
        let g = graph_from(&[vec![0, 1], vec![1, 0]]);
        assert_eq!(format!("{}", g), "ZeroGraph(workers: 2, tasks: 2, edges: 2)");
    }
}
