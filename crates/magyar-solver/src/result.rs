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

use magyar_bnb::stats::SolveStatistics;
use magyar_model::assignment::Assignment;
use num_traits::PrimInt;

/// The collected result of a solve: every optimal assignment that was
/// produced, in discovery order, plus the statistics of the run.
///
/// An empty assignment list is a valid outcome, not an error; it means the
/// producer finished without finding any matching (defensively possible,
/// never expected for validated input).
#[derive(Debug, Clone)]
pub struct SolveOutcome<T> {
    assignments: Vec<Assignment<T>>,
    statistics: SolveStatistics,
}

impl<T> SolveOutcome<T>
where
    T: PrimInt,
{
    /// Constructs a new `SolveOutcome`.
    #[inline]
    pub fn new(assignments: Vec<Assignment<T>>, statistics: SolveStatistics) -> Self {
        Self {
            assignments,
            statistics,
        }
    }

    /// Returns every produced assignment in discovery order.
    #[inline]
    pub fn assignments(&self) -> &[Assignment<T>] {
        &self.assignments
    }

    /// Returns the number of produced assignments.
    #[inline]
    pub fn num_assignments(&self) -> usize {
        self.assignments.len()
    }

    /// Returns `true` if no assignment was produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Returns the shared total cost of the optimal assignments, or `None`
    /// when nothing was produced.
    #[inline]
    pub fn optimal_cost(&self) -> Option<T> {
        self.assignments.first().map(Assignment::total_cost)
    }

    /// Returns the solve statistics.
    #[inline]
    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }

    /// Consumes the outcome, returning the assignments.
    #[inline]
    pub fn into_assignments(self) -> Vec<Assignment<T>> {
        self.assignments
    }
}

impl<T> std::fmt::Display for SolveOutcome<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.optimal_cost() {
            Some(cost) => writeln!(
                f,
                "SolveOutcome: {} optimal assignment(s) at cost {}",
                self.num_assignments(),
                cost
            )?,
            None => writeln!(f, "SolveOutcome: no assignments produced")?,
        }
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magyar_model::{index::TaskIndex, slot::TaskSlot};

    fn assignment(tasks: &[usize], cost: i64) -> Assignment<i64> {
        Assignment::new(
            tasks
                .iter()
                .map(|&t| TaskSlot::some(TaskIndex::new(t)))
                .collect(),
            cost,
        )
    }

    #[test]
    fn test_accessors() {
        let outcome = SolveOutcome::new(
            vec![assignment(&[0, 1], 3), assignment(&[1, 0], 3)],
            SolveStatistics::default(),
        );

        assert_eq!(outcome.num_assignments(), 2);
        assert!(!outcome.is_empty());
        assert_eq!(outcome.optimal_cost(), Some(3));
        assert_eq!(outcome.assignments().len(), 2);
        assert_eq!(outcome.into_assignments().len(), 2);
    }

    #[test]
    fn test_empty_outcome_is_valid() {
        let outcome = SolveOutcome::<i64>::new(Vec::new(), SolveStatistics::default());

        assert!(outcome.is_empty());
        assert_eq!(outcome.optimal_cost(), None);
        assert!(format!("{}", outcome).contains("no assignments produced"));
    }

    #[test]
    fn test_display_reports_count_and_cost() {
        let outcome = SolveOutcome::new(vec![assignment(&[0], 7)], SolveStatistics::default());
        let rendered = format!("{}", outcome);

        assert!(rendered.contains("1 optimal assignment(s) at cost 7"));
        assert!(rendered.contains("Magyar Solver Statistics"));
    }
}
