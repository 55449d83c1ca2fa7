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

//! Fan-out monitoring
//!
//! `CompositeSolveMonitor` forwards every event to its children in
//! insertion order. This lets callers mix console logging, metrics capture,
//! and test probes without coupling them to the solver.

use crate::{
    cover::VertexCover,
    monitor::solve_monitor::SolveMonitor,
    stats::SolveStatistics,
};
use magyar_model::{assignment::Assignment, matrix::CostMatrix};
use num_traits::PrimInt;

/// A monitor that aggregates multiple monitors and forwards events to all
/// of them.
pub struct CompositeSolveMonitor<'a, T>
where
    T: PrimInt,
{
    monitors: Vec<Box<dyn SolveMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeSolveMonitor<'a, T>
where
    T: PrimInt,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeSolveMonitor<'a, T>
where
    T: PrimInt,
{
    /// Creates a new empty `CompositeSolveMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeSolveMonitor` with the specified capacity.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SolveMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SolveMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of contained monitors.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Clears all monitors from the composite monitor.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }
}

impl<'a, T> FromIterator<Box<dyn SolveMonitor<T> + 'a>> for CompositeSolveMonitor<'a, T>
where
    T: PrimInt,
{
    #[inline(always)]
    fn from_iter<I: IntoIterator<Item = Box<dyn SolveMonitor<T> + 'a>>>(iter: I) -> Self {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> SolveMonitor<T> for CompositeSolveMonitor<'a, T>
where
    T: PrimInt,
{
    fn on_enter_solve(&mut self, matrix: &CostMatrix<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_solve(matrix);
        }
    }

    fn on_iteration(&mut self, iteration: u64, matrix: &CostMatrix<T>) {
        for monitor in &mut self.monitors {
            monitor.on_iteration(iteration, matrix);
        }
    }

    fn on_reduced(&mut self, matrix: &CostMatrix<T>) {
        for monitor in &mut self.monitors {
            monitor.on_reduced(matrix);
        }
    }

    fn on_matching(&mut self, matching_size: usize, required_size: usize) {
        for monitor in &mut self.monitors {
            monitor.on_matching(matching_size, required_size);
        }
    }

    fn on_cover(&mut self, cover: &VertexCover) {
        for monitor in &mut self.monitors {
            monitor.on_cover(cover);
        }
    }

    fn on_assignment(&mut self, assignment: &Assignment<T>) {
        for monitor in &mut self.monitors {
            monitor.on_assignment(assignment);
        }
    }

    fn on_exit_solve(&mut self, statistics: &SolveStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_solve(statistics);
        }
    }

    fn name(&self) -> &str {
        "CompositeSolveMonitor"
    }
}
