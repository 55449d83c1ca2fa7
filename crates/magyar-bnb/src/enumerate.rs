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

//! Branch-and-bound enumeration of every maximum matching.
//!
//! Once the Hungarian iteration reaches a perfect matching, each further
//! maximum matching of that exact zero graph is another optimal assignment
//! with identical total cost. The enumerator walks all of them without
//! repeats: at each frame the right vertex under the cursor is either
//! excluded (its matched edge removed, a replacement matching computed) or
//! included (its left endpoint pinned to it). When the matching saturates
//! the left side, a pinned left vertex appears in every surviving branch
//! matching, so the two branches partition the remaining choice space and
//! no matching can surface twice; every branch removes an edge or fixes a
//! pairing, so the search terminates.

use crate::{
    graph::ZeroGraph,
    matching::{maximum_matching, Matching},
    stack::{Frame, FrameStack},
};
use magyar_core::num::ops::saturating_arithmetic::SaturatingAddVal;

/// A lazy, pull-based iterator over all maximum-cardinality matchings of a
/// fixed zero graph.
///
/// Construction does not search; work happens per `next()` call, and a
/// caller that stops pulling simply drops the remaining stack. Matchings
/// come back in discovery order, which is implementation-defined.
pub struct MatchingEnumerator {
    stack: FrameStack,
    /// The maximum cardinality; branches that fall below it are pruned.
    target_size: usize,
    /// One past the last right vertex id.
    end_vertex: usize,
    frames_explored: u64,
    rematches: u64,
}

impl MatchingEnumerator {
    /// Creates an enumerator over the maximum matchings of `graph`.
    ///
    /// `matching` must be a maximum matching of `graph`; its size becomes
    /// the bound every branch has to meet. The yielded sequence is
    /// duplicate-free when the matching saturates the left side, which is
    /// how the solver always invokes it.
    pub fn new(graph: ZeroGraph, matching: Matching) -> Self {
        let first_right = graph.first_right_vertex();
        let end_vertex = graph.num_vertices();
        let target_size = matching.len();

        let mut stack = FrameStack::preallocated(graph.num_tasks());
        stack.push(Frame::new(graph, matching, first_right));

        Self {
            stack,
            target_size,
            end_vertex,
            frames_explored: 0,
            rematches: 0,
        }
    }

    /// Returns the cardinality every yielded matching has.
    #[inline]
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Returns the number of frames processed so far.
    #[inline]
    pub fn frames_explored(&self) -> u64 {
        self.frames_explored
    }

    /// Returns how many replacement matchings were computed so far.
    #[inline]
    pub fn rematches(&self) -> u64 {
        self.rematches
    }
}

impl Iterator for MatchingEnumerator {
    type Item = Matching;

    fn next(&mut self) -> Option<Matching> {
        while let Some(frame) = self.stack.pop() {
            self.frames_explored = self.frames_explored.saturating_add_val(1);

            let Frame {
                graph,
                matching,
                mut cursor,
            } = frame;

            // Right vertices absent from this branch's matching carry no
            // decision; skip them.
            while cursor < self.end_vertex && !matching.contains_right(cursor) {
                cursor += 1;
            }

            // Every right vertex is decided: this branch is one answer.
            if cursor >= self.end_vertex {
                return Some(matching);
            }

            let right_vertex = cursor;
            let left_vertex = matching
                .left_of(right_vertex)
                .expect("expected the cursor to stop on a matched right vertex");

            // Exclusion branch: drop the matched edge and rebuild a maximum
            // matching on the remaining graph. The branch survives only if
            // it still reaches the target cardinality.
            let mut excluded_graph = graph.clone();
            excluded_graph.remove_edge(left_vertex, right_vertex);
            let excluded_matching = maximum_matching(&excluded_graph);
            self.rematches = self.rematches.saturating_add_val(1);

            if excluded_matching.len() >= self.target_size {
                self.stack
                    .push(Frame::new(excluded_graph, excluded_matching, cursor));
            }

            // Inclusion branch: pin the left endpoint to this right vertex
            // and move on. The matching is untouched, so it still meets the
            // target. Pushed last, popped first.
            let mut included_graph = graph;
            included_graph.restrict_left(left_vertex, right_vertex);
            self.stack
                .push(Frame::new(included_graph, matching, cursor + 1));
        }

        None
    }
}

impl std::fmt::Display for MatchingEnumerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MatchingEnumerator(target: {}, pending: {})",
            self.target_size,
            self.stack.depth()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magyar_model::matrix::CostMatrix;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::HashSet;

    fn graph_from(rows: &[Vec<i64>]) -> ZeroGraph {
        ZeroGraph::from_matrix(&CostMatrix::from_rows(rows))
    }

    fn enumerate_all(graph: ZeroGraph) -> Vec<Matching> {
        let matching = maximum_matching(&graph);
        MatchingEnumerator::new(graph, matching).collect()
    }

    /// Normalized (right, left) pair list for set comparisons.
    fn key(matching: &Matching) -> Vec<(usize, usize)> {
        let mut pairs: Vec<_> = matching.iter().collect();
        pairs.sort_unstable();
        pairs
    }

    /// Every maximum matching of the graph, found the slow way: try all
    /// injective left-to-right mappings over the edge sets.
    fn brute_force_max_matchings(graph: &ZeroGraph) -> HashSet<Vec<(usize, usize)>> {
        fn extend(
            graph: &ZeroGraph,
            left: usize,
            taken: &mut Vec<(usize, usize)>,
            used_rights: &mut HashSet<usize>,
            out: &mut Vec<Vec<(usize, usize)>>,
        ) {
            if left == graph.num_workers() {
                let mut pairs: Vec<_> = taken.iter().map(|&(l, r)| (r, l)).collect();
                pairs.sort_unstable();
                out.push(pairs);
                return;
            }

            // Leave this left vertex unmatched.
            extend(graph, left + 1, taken, used_rights, out);

            let neighbors: Vec<usize> = graph.neighbors(left).iter().copied().collect();
            for right in neighbors {
                if used_rights.insert(right) {
                    taken.push((left, right));
                    extend(graph, left + 1, taken, used_rights, out);
                    taken.pop();
                    used_rights.remove(&right);
                }
            }
        }

        let mut all = Vec::new();
        extend(
            graph,
            0,
            &mut Vec::new(),
            &mut HashSet::new(),
            &mut all,
        );

        let best = all.iter().map(Vec::len).max().unwrap_or(0);
        all.into_iter().filter(|m| m.len() == best).collect()
    }

    #[test]
    fn test_two_by_two_complete_graph_has_two_matchings() {
        let results = enumerate_all(graph_from(&[vec![0, 0], vec![0, 0]]));
        assert_eq!(results.len(), 2);

        let keys: HashSet<_> = results.iter().map(key).collect();
        assert!(keys.contains(&vec![(2, 1), (3, 0)]));
        assert!(keys.contains(&vec![(2, 0), (3, 1)]));
    }

    #[test]
    fn test_three_by_three_complete_graph_has_six_matchings() {
        let results = enumerate_all(graph_from(&[vec![0; 3], vec![0; 3], vec![0; 3]]));
        assert_eq!(results.len(), 6);

        // Duplicate-free is an invariant, not a belief.
        let keys: HashSet<_> = results.iter().map(key).collect();
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn test_unique_perfect_matching_yields_once() {
        let results = enumerate_all(graph_from(&[vec![0, 5, 5], vec![5, 0, 5], vec![5, 5, 0]]));
        assert_eq!(results.len(), 1);
        assert_eq!(key(&results[0]), vec![(3, 0), (4, 1), (5, 2)]);
    }

    #[test]
    fn test_imperfect_graph_enumerates_all_maximum_matchings() {
        // Two workers compete for a single zero column; both one-pair
        // matchings are maximum.
        let results = enumerate_all(graph_from(&[vec![0, 7], vec![0, 9]]));
        assert_eq!(results.len(), 2);

        let keys: HashSet<_> = results.iter().map(key).collect();
        assert!(keys.contains(&vec![(2, 0)]));
        assert!(keys.contains(&vec![(2, 1)]));
    }

    #[test]
    fn test_all_yielded_matchings_reach_target_size() {
        let graph = graph_from(&[vec![0, 0, 5], vec![0, 5, 0], vec![5, 0, 0]]);
        let matching = maximum_matching(&graph);
        let target = matching.len();

        for m in MatchingEnumerator::new(graph, matching) {
            assert_eq!(m.len(), target);
        }
    }

    #[test]
    fn test_matches_brute_force_on_fixed_graphs() {
        let graphs = [
            graph_from(&[vec![0, 0, 5], vec![0, 5, 0], vec![5, 0, 0]]),
            graph_from(&[vec![0, 0, 5], vec![5, 0, 0], vec![0, 5, 0]]),
            graph_from(&[vec![0, 5, 5, 5], vec![0, 0, 5, 5], vec![5, 0, 0, 5], vec![5, 5, 0, 0]]),
        ];

        for graph in graphs {
            let expected = brute_force_max_matchings(&graph);
            let actual: Vec<_> = enumerate_all(graph.clone());
            let actual_keys: HashSet<_> = actual.iter().map(key).collect();

            assert_eq!(actual.len(), actual_keys.len(), "duplicate matching yielded");
            assert_eq!(actual_keys, expected, "mismatch for {}", graph);
        }
    }

    #[test]
    fn test_matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(0x6d61_6779);

        let mut checked = 0;
        while checked < 20 {
            let size = rng.gen_range(2..=5);
            let rows: Vec<Vec<i64>> = (0..size)
                .map(|_| (0..size).map(|_| rng.gen_range(0..3)).collect())
                .collect();

            let graph = graph_from(&rows);
            // The duplicate-free guarantee holds for saturating matchings,
            // which is the only way the solver drives the enumerator.
            if !maximum_matching(&graph).saturates_left_side(graph.num_workers()) {
                continue;
            }
            checked += 1;

            let expected = brute_force_max_matchings(&graph);
            let actual: Vec<_> = enumerate_all(graph.clone());
            let actual_keys: HashSet<_> = actual.iter().map(key).collect();

            assert_eq!(actual.len(), actual_keys.len(), "duplicate matching yielded");
            assert_eq!(actual_keys, expected, "mismatch for {}", graph);
        }
    }

    #[test]
    fn test_early_termination_is_clean() {
        let graph = graph_from(&[vec![0; 4], vec![0; 4], vec![0; 4], vec![0; 4]]);
        let matching = maximum_matching(&graph);
        let mut enumerator = MatchingEnumerator::new(graph, matching);

        // Pull two of the 24 answers and stop; dropping the enumerator
        // discards the remaining stack without further work.
        let first = enumerator.next().unwrap();
        let second = enumerator.next().unwrap();
        assert_ne!(key(&first), key(&second));
        drop(enumerator);
    }

    #[test]
    fn test_counters_advance() {
        let graph = graph_from(&[vec![0, 0], vec![0, 0]]);
        let matching = maximum_matching(&graph);
        let mut enumerator = MatchingEnumerator::new(graph, matching);

        assert_eq!(enumerator.frames_explored(), 0);
        let _ = enumerator.by_ref().count();
        assert!(enumerator.frames_explored() > 0);
        assert!(enumerator.rematches() > 0);
    }
}
