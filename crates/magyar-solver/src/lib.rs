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

//! # Magyar Solver
//!
//! The orchestrating crate of the Magyar assignment solver. It validates
//! user input, prepares the working matrix (forbidden-pair penalties and
//! dummy-task padding), drives the Hungarian iteration from `magyar_bnb`,
//! and exposes the results as a lazy, pull-based sequence of optimal
//! assignments.
//!
//! ## Entry points
//!
//! - [`solver::solve_assignment`] / [`solver::solve_assignment_with_forbidden`]:
//!   plain functions for the common case.
//! - [`solver::AssignmentSolver`] with [`solver::AssignmentSolverBuilder`]:
//!   configurable solving (solution limits, custom monitors), plus
//!   `solve_all` variants that collect a [`result::SolveOutcome`].

pub mod num;
pub mod result;
pub mod solver;

pub use num::CostNumeric;
pub use result::SolveOutcome;
pub use solver::{
    solve_assignment, solve_assignment_with_forbidden, AssignmentIter, AssignmentSolver,
    AssignmentSolverBuilder,
};
