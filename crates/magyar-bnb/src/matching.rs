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

//! Maximum-cardinality matching via Kuhn's augmenting-path search.
//!
//! The search is iterative: recursion over alternating paths is replaced by
//! an explicit path stack so the call depth never grows with the matrix
//! size. Which maximum matching comes back depends on vertex and neighbor
//! iteration order; callers must treat the result as one arbitrary
//! representative of the maximum-cardinality family, never as canonical.

use crate::graph::ZeroGraph;
use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A partial one-to-one pairing between left and right vertices, keyed by
/// the right-side (task) vertex id.
///
/// Invariant: every key and every value appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matching {
    right_to_left: FxHashMap<usize, usize>,
}

impl Matching {
    /// Creates an empty matching.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of matched pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.right_to_left.len()
    }

    /// Returns `true` if no pair is matched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.right_to_left.is_empty()
    }

    /// Returns the left vertex matched to `right_vertex`, if any.
    #[inline]
    pub fn left_of(&self, right_vertex: usize) -> Option<usize> {
        self.right_to_left.get(&right_vertex).copied()
    }

    /// Returns `true` if `right_vertex` is matched.
    #[inline]
    pub fn contains_right(&self, right_vertex: usize) -> bool {
        self.right_to_left.contains_key(&right_vertex)
    }

    /// Matches `right_vertex` to `left_vertex`, replacing any previous
    /// partner of `right_vertex`.
    #[inline]
    pub fn insert(&mut self, right_vertex: usize, left_vertex: usize) {
        self.right_to_left.insert(right_vertex, left_vertex);
    }

    /// Returns `true` when the matching saturates a left side of the given
    /// size.
    #[inline]
    pub fn saturates_left_side(&self, num_left: usize) -> bool {
        self.len() >= num_left
    }

    /// Iterates over `(right_vertex, left_vertex)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.right_to_left.iter().map(|(&r, &l)| (r, l))
    }

    /// Iterates over the matched left vertices in arbitrary order.
    pub fn lefts(&self) -> impl Iterator<Item = usize> + '_ {
        self.right_to_left.values().copied()
    }
}

impl std::fmt::Display for Matching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Matching(pairs: {})", self.len())
    }
}

/// One level of the explicit augmenting-path search.
struct PathStep {
    /// The left vertex visited at this level.
    left: usize,
    /// Snapshot of the left vertex's neighbors.
    neighbors: SmallVec<[usize; 8]>,
    /// Next neighbor to try.
    cursor: usize,
    /// The matched right vertex that led to this level, or `usize::MAX`
    /// for the root.
    via_right: usize,
}

const NO_ENTRY_EDGE: usize = usize::MAX;

/// Computes a maximum-cardinality matching of the given graph.
///
/// For each left vertex in graph order, the current matching is extended by
/// a depth-first search over alternating paths, rematching already-taken
/// right vertices to alternative partners where possible. A left vertex is
/// visited at most once per outer attempt; the visited set is cleared
/// between attempts, not within one search.
///
/// Returns the empty matching when the graph has no edges.
pub fn maximum_matching(graph: &ZeroGraph) -> Matching {
    let mut matching = Matching::new();
    let mut visited = FixedBitSet::with_capacity(graph.num_vertices());

    for root in graph.left_vertices() {
        if graph.neighbors(root).is_empty() {
            continue;
        }

        visited.clear();
        try_augment(graph, &mut matching, root, &mut visited);
    }

    matching
}

/// Attempts to extend `matching` by one pair starting from the unmatched
/// (or rematchable) left vertex `root`. On success, every edge along the
/// discovered alternating path is flipped.
fn try_augment(
    graph: &ZeroGraph,
    matching: &mut Matching,
    root: usize,
    visited: &mut FixedBitSet,
) -> bool {
    visited.insert(root);

    let mut path: Vec<PathStep> = vec![PathStep {
        left: root,
        neighbors: graph.neighbors(root).iter().copied().collect(),
        cursor: 0,
        via_right: NO_ENTRY_EDGE,
    }];

    loop {
        let right_vertex = {
            let Some(step) = path.last_mut() else {
                return false;
            };

            if step.cursor >= step.neighbors.len() {
                // This level is exhausted; backtrack.
                path.pop();
                continue;
            }

            let right_vertex = step.neighbors[step.cursor];
            step.cursor += 1;
            right_vertex
        };

        match matching.left_of(right_vertex) {
            None => {
                // Free right vertex: flip the alternating path. Each level
                // takes over the right vertex it descended through, and the
                // deepest level claims the free vertex found here.
                let mut claimed_right = right_vertex;
                for step in path.iter().rev() {
                    matching.insert(claimed_right, step.left);
                    claimed_right = step.via_right;
                }
                debug_assert_eq!(claimed_right, NO_ENTRY_EDGE);
                return true;
            }
            Some(next_left) => {
                if !visited.contains(next_left) {
                    visited.insert(next_left);
                    path.push(PathStep {
                        left: next_left,
                        neighbors: graph.neighbors(next_left).iter().copied().collect(),
                        cursor: 0,
                        via_right: right_vertex,
                    });
                }
            }
        }
    }
}
