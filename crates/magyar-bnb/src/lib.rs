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

//! # Magyar BnB
//!
//! The combinatorial engine of the Magyar assignment solver. Everything the
//! Hungarian iteration needs lives here: matrix reduction, the zero-cost
//! bipartite graph, maximum-cardinality matching, minimum vertex covers, and
//! the branch-and-bound enumerator that walks *every* maximum matching of a
//! fixed graph.
//!
//! ## Modules
//!
//! - `graph`: `ZeroGraph`, the bipartite adjacency over workers and tasks
//!   with an edge wherever the reduced matrix hits its minimum.
//! - `matching`: Kuhn's augmenting-path maximum matching, iterative with an
//!   explicit path stack.
//! - `cover`: König's minimum-vertex-cover construction from a maximum
//!   matching.
//! - `reduce`: row/column reduction and re-reduction by a vertex cover.
//! - `stack`: the LIFO of branch-and-bound frames; every frame owns its own
//!   graph and matching so sibling branches never share mutable state.
//! - `enumerate`: `MatchingEnumerator`, a lazy iterator over all maximum
//!   matchings of a fixed zero graph.
//! - `monitor`: purely observational progress reporting (no-op, composite,
//!   console log).
//! - `stats`: counters describing a finished solve.
//!
//! The engine assumes validated input; it never validates user data itself
//! and it never fails once running.

pub mod cover;
pub mod enumerate;
pub mod graph;
pub mod matching;
pub mod monitor;
pub mod reduce;
pub mod stack;
pub mod stats;
