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

//! # Magyar Model
//!
//! **The Core Domain Model for the Magyar Assignment Solver.**
//!
//! This crate defines the data structures used to represent the
//! **assignment problem**: a rectangular cost matrix pairing workers with
//! tasks, an optional permission mask excluding forbidden pairs, and the
//! final one-to-one assignments. It is the data interchange layer between
//! problem definition (user input) and the solving engine (`magyar_bnb`).
//!
//! ## Architecture
//!
//! * **`index`**: Strongly-typed wrappers (`WorkerIndex`, `TaskIndex`) to
//!   prevent logical indexing errors between the two sides of the problem.
//! * **`matrix`**: The immutable `CostMatrix`, stored as a flat row-major
//!   vector for cache locality during reduction sweeps.
//! * **`mask`**: The `PermissionMask` marking which worker/task pairs are
//!   admissible.
//! * **`slot`**: `TaskSlot`, a sentinel-encoded optional task index that
//!   keeps per-worker assignment storage to a single machine word.
//! * **`assignment`**: The output format, one task per worker plus the
//!   total cost.
//! * **`validate`**: Eager input validation and the error taxonomy shared
//!   by every solver entry point.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Worker and task indices are distinct types.
//! 2.  **Fail-Fast**: User input is validated eagerly, so the engine never
//!     observes an invalid matrix; structural misuse panics with a
//!     descriptive message.
//! 3.  **Immutability**: Every reduction step produces a fresh matrix value;
//!     the engine never mutates a matrix in place.

pub mod assignment;
pub mod index;
pub mod mask;
pub mod matrix;
pub mod slot;
pub mod validate;
