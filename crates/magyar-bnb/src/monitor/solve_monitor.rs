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

use crate::{cover::VertexCover, stats::SolveStatistics};
use magyar_model::{assignment::Assignment, matrix::CostMatrix};
use num_traits::PrimInt;

/// Trait for observing the progress of the assignment solver.
///
/// Implementations receive the same event vocabulary a human would want in
/// a progress log: the matrix entering each iteration, its reduction, the
/// matching size reached, the vertex cover of an imperfect round, and every
/// assignment yielded to the consumer. The solver ignores anything a
/// monitor does; events flow one way.
pub trait SolveMonitor<T>
where
    T: PrimInt,
{
    /// Called once with the working matrix before the iteration loop begins.
    fn on_enter_solve(&mut self, matrix: &CostMatrix<T>);

    /// Called at the start of every Hungarian iteration. Iterations are
    /// numbered from 1.
    fn on_iteration(&mut self, iteration: u64, matrix: &CostMatrix<T>);

    /// Called after the matrix has been reduced.
    fn on_reduced(&mut self, matrix: &CostMatrix<T>);

    /// Called with the cardinality of the maximum matching found on the
    /// current zero graph and the cardinality a perfect matching needs.
    fn on_matching(&mut self, matching_size: usize, required_size: usize);

    /// Called with the minimum vertex cover after an imperfect matching.
    fn on_cover(&mut self, cover: &VertexCover);

    /// Called for every assignment yielded to the consumer.
    fn on_assignment(&mut self, assignment: &Assignment<T>);

    /// Called when the producer has run to exhaustion.
    fn on_exit_solve(&mut self, statistics: &SolveStatistics);

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl<T> std::fmt::Debug for dyn SolveMonitor<T> + '_
where
    T: PrimInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolveMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SolveMonitor<T> + '_
where
    T: PrimInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolveMonitor({})", self.name())
    }
}
