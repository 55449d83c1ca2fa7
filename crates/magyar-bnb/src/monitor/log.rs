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

/// A monitor that prints every solve event to the console in a
/// human-readable form: the matrix entering each iteration, its reduction,
/// the matching verdict, cover sets of imperfect rounds, and each solution
/// as `worker -> task` lines.
#[derive(Debug, Clone, Default)]
pub struct LogSolveMonitor;

impl LogSolveMonitor {
    /// Creates a new `LogSolveMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> SolveMonitor<T> for LogSolveMonitor
where
    T: PrimInt + std::fmt::Display,
{
    fn on_enter_solve(&mut self, matrix: &CostMatrix<T>) {
        println!(
            "Solving a {} x {} assignment instance",
            matrix.num_workers(),
            matrix.num_tasks()
        );
    }

    fn on_iteration(&mut self, iteration: u64, matrix: &CostMatrix<T>) {
        println!("Current iteration: {}", iteration);
        println!("Current matrix:\n{}", matrix);
    }

    fn on_reduced(&mut self, matrix: &CostMatrix<T>) {
        println!("Reduced matrix:\n{}", matrix);
    }

    fn on_matching(&mut self, matching_size: usize, required_size: usize) {
        if matching_size < required_size {
            println!(
                "Matching has size {}, but {} is required. Reducing by minimum vertex cover will be applied",
                matching_size, required_size
            );
        } else {
            println!("Suggested matching is fully matched");
        }
    }

    fn on_cover(&mut self, cover: &VertexCover) {
        println!("Minimum vertex cover:\n{}", cover);
    }

    fn on_assignment(&mut self, assignment: &Assignment<T>) {
        println!("Solution (cost {}):", assignment.total_cost());
        for (worker, task) in assignment.iter() {
            println!("{} -> {}", worker.get(), task.get());
        }
    }

    fn on_exit_solve(&mut self, statistics: &SolveStatistics) {
        println!("{}", statistics);
    }

    fn name(&self) -> &str {
        "LogSolveMonitor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magyar_model::{index::TaskIndex, slot::TaskSlot};

    #[test]
    fn test_events_do_not_panic() {
        let mut log = LogSolveMonitor::new();
        // The monitor implements `SolveMonitor<T>` for every integer type;
        // pin the cost type through a trait object.
        let monitor: &mut dyn SolveMonitor<i64> = &mut log;

        let matrix = CostMatrix::from_rows(&[vec![1i64, 2], vec![3, 4]]);
        let assignment = Assignment::new(
            vec![
                TaskSlot::some(TaskIndex::new(0)),
                TaskSlot::some(TaskIndex::new(1)),
            ],
            5i64,
        );

        monitor.on_enter_solve(&matrix);
        monitor.on_iteration(1, &matrix);
        monitor.on_reduced(&matrix);
        monitor.on_matching(1, 2);
        monitor.on_matching(2, 2);
        monitor.on_assignment(&assignment);
        monitor.on_exit_solve(&SolveStatistics::default());
        assert_eq!(monitor.name(), "LogSolveMonitor");
    }
}
