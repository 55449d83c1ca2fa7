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

use crate::{
    cover::VertexCover,
    monitor::solve_monitor::SolveMonitor,
    stats::SolveStatistics,
};
use magyar_model::{assignment::Assignment, matrix::CostMatrix};
use num_traits::PrimInt;

/// A no-operation monitor that implements the `SolveMonitor` trait but does
/// nothing on any event.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor<T>
where
    T: PrimInt,
{
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOperationMonitor<T>
where
    T: PrimInt,
{
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> SolveMonitor<T> for NoOperationMonitor<T>
where
    T: PrimInt,
{
    #[inline(always)]
    fn on_enter_solve(&mut self, _matrix: &CostMatrix<T>) {}

    #[inline(always)]
    fn on_iteration(&mut self, _iteration: u64, _matrix: &CostMatrix<T>) {}

    #[inline(always)]
    fn on_reduced(&mut self, _matrix: &CostMatrix<T>) {}

    #[inline(always)]
    fn on_matching(&mut self, _matching_size: usize, _required_size: usize) {}

    #[inline(always)]
    fn on_cover(&mut self, _cover: &VertexCover) {}

    #[inline(always)]
    fn on_assignment(&mut self, _assignment: &Assignment<T>) {}

    #[inline(always)]
    fn on_exit_solve(&mut self, _statistics: &SolveStatistics) {}

    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magyar_model::matrix::CostMatrix;

    #[test]
    fn test_all_events_are_accepted() {
        let mut monitor = NoOperationMonitor::<i64>::new();
        let matrix = CostMatrix::from_rows(&[vec![1i64, 2], vec![3, 4]]);

        monitor.on_enter_solve(&matrix);
        monitor.on_iteration(1, &matrix);
        monitor.on_reduced(&matrix);
        monitor.on_matching(1, 2);
        monitor.on_exit_solve(&SolveStatistics::default());

        assert_eq!(monitor.name(), "NoOperationMonitor");
    }
}
