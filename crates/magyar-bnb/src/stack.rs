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

use crate::{graph::ZeroGraph, matching::Matching};
use magyar_core::num::ops::saturating_arithmetic::{SaturatingAddVal, SaturatingMulVal};

/// A snapshot of the branch-and-bound search at one decision point.
///
/// Every frame owns its graph and matching outright. That ownership is the
/// isolation guarantee of the enumeration: a branch may mutate its copy
/// freely and a sibling frame popped later still sees the state it was
/// created with.
#[derive(Clone, Debug)]
pub struct Frame {
    /// The zero graph as this branch sees it.
    pub graph: ZeroGraph,
    /// A maximum matching of `graph`.
    pub matching: Matching,
    /// Global id of the next right vertex to decide.
    pub cursor: usize,
}

impl Frame {
    /// Creates a new frame.
    #[inline]
    pub fn new(graph: ZeroGraph, matching: Matching, cursor: usize) -> Self {
        Self {
            graph,
            matching,
            cursor,
        }
    }
}

/// A LIFO stack of pending branch-and-bound frames.
#[derive(Clone, Debug, Default)]
pub struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    /// Creates a new, empty `FrameStack`.
    #[inline]
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Creates a preallocated `FrameStack` based on problem size. Each
    /// decided right vertex adds at most two frames, one per branch.
    #[inline]
    pub fn preallocated(num_tasks: usize) -> Self {
        Self {
            frames: Vec::with_capacity(num_tasks.saturating_mul_val(2).saturating_add_val(1)),
        }
    }

    /// Returns the number of pending frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if there are no pending frames (search exhausted).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Pushes a frame onto the stack.
    #[inline]
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Pops the most recently pushed frame.
    #[inline]
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Clears all frames but keeps allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.frames.clear();
    }
}

impl std::fmt::Display for FrameStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FrameStack(depth: {})", self.frames.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::maximum_matching;
    use magyar_model::matrix::CostMatrix;

    fn frame(cursor: usize) -> Frame {
        let graph = ZeroGraph::from_matrix(&CostMatrix::from_rows(&[vec![0i64, 1], vec![1, 0]]));
        let matching = maximum_matching(&graph);
        Frame::new(graph, matching, cursor)
    }

    #[test]
    fn test_new_and_preallocated_start_empty() {
        let s = FrameStack::new();
        assert!(s.is_empty());
        assert_eq!(s.depth(), 0);

        let s2 = FrameStack::preallocated(8);
        assert!(s2.is_empty());
        assert_eq!(s2.depth(), 0);
    }

    #[test]
    fn test_push_and_pop_are_lifo() {
        let mut s = FrameStack::new();
        s.push(frame(2));
        s.push(frame(3));
        assert_eq!(s.depth(), 2);

        assert_eq!(s.pop().unwrap().cursor, 3);
        assert_eq!(s.pop().unwrap().cursor, 2);
        assert!(s.pop().is_none());
        assert!(s.is_empty());
    }

    #[test]
    fn test_reset_clears_frames() {
        let mut s = FrameStack::preallocated(4);
        s.push(frame(2));
        s.push(frame(2));
        s.reset();

        assert!(s.is_empty());
        assert_eq!(s.depth(), 0);
    }

    #[test]
    fn test_frames_are_isolated_after_push() {
        let mut s = FrameStack::new();
        let original = frame(2);
        let edges_before = original.graph.num_edges();

        s.push(original.clone());

        // Mutating the popped copy must not affect a clone taken earlier.
        let mut popped = s.pop().unwrap();
        popped.graph.remove_edge(0, 2);
        assert_eq!(original.graph.num_edges(), edges_before);
    }

    #[test]
    fn test_display_includes_depth() {
        let mut s = FrameStack::new();
        assert_eq!(format!("{}", s), "FrameStack(depth: 0)");
        s.push(frame(2));
        assert_eq!(format!("{}", s), "FrameStack(depth: 1)");
    }
}
