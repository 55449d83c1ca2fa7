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

//! # Assignment Solver
//!
//! The orchestrator of the Hungarian iteration. Input is validated eagerly,
//! forbidden pairs are replaced by a penalty strictly above the matrix
//! maximum, the matrix is squared with dummy zero-cost tasks, and then the
//! loop runs: reduce, build the zero graph, match; a perfect matching hands
//! over to the branch-and-bound enumerator, an imperfect one derives a
//! minimum vertex cover and re-reduces.
//!
//! Assignments are produced lazily: `AssignmentIter` does no combinatorial
//! work until pulled, and a consumer that stops pulling simply drops the
//! remaining enumeration stack. Termination of the outer loop follows the
//! classical convergence argument: every re-reduction grows the reachable
//! zero structure without shrinking the matching, bounded by O(n)
//! iterations.
//!
//! ## Usage
//!
//! ```rust
//! use magyar_model::matrix::CostMatrix;
//! use magyar_solver::solver::solve_assignment;
//!
//! let matrix = CostMatrix::from_rows(&[vec![4u64, 1], vec![2, 3]]);
//! let assignments: Vec<_> = solve_assignment(&matrix).unwrap().collect();
//!
//! assert_eq!(assignments.len(), 1);
//! assert_eq!(assignments[0].total_cost(), 3);
//! ```

use crate::{num::CostNumeric, result::SolveOutcome};
use magyar_bnb::{
    cover::find_min_vertex_cover,
    enumerate::MatchingEnumerator,
    graph::ZeroGraph,
    matching::{maximum_matching, Matching},
    monitor::{no_op::NoOperationMonitor, solve_monitor::SolveMonitor},
    reduce::{reduce, reduce_by_cover},
    stats::SolveStatistics,
};
use magyar_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use magyar_model::{
    assignment::Assignment,
    index::{TaskIndex, WorkerIndex},
    mask::PermissionMask,
    matrix::CostMatrix,
    slot::TaskSlot,
    validate::{validate_costs, validate_dimensions, validate_mask, ValidationError},
};
use rustc_hash::FxHashSet;

/// The Hungarian-method assignment solver.
///
/// The solver itself is cheap and reusable; each `solve*` call validates
/// its input and hands back an independent lazy producer.
#[derive(Debug, Clone, Default)]
pub struct AssignmentSolver {
    solution_limit: Option<u64>,
}

impl AssignmentSolver {
    /// Creates a solver with default options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configured solution limit, if any.
    #[inline]
    pub fn solution_limit(&self) -> Option<u64> {
        self.solution_limit
    }

    /// Returns `true` if a solution limit is configured.
    #[inline]
    pub fn has_solution_limit(&self) -> bool {
        self.solution_limit.is_some()
    }

    /// Solves the assignment problem for `matrix`, yielding every optimal
    /// assignment lazily.
    ///
    /// Fails with a `DimensionError` when the matrix has more tasks than
    /// workers and with an `InvalidMatrixError` when a cost entry is
    /// negative. Validation is eager; the returned producer cannot fail.
    pub fn solve<T, M>(
        &self,
        matrix: &CostMatrix<T>,
        monitor: M,
    ) -> Result<AssignmentIter<T, M>, ValidationError>
    where
        T: CostNumeric,
        M: SolveMonitor<T>,
    {
        validate_dimensions(matrix)?;
        validate_costs(matrix)?;

        let working = square_by_dummy_tasks(matrix);
        Ok(AssignmentIter::new(
            matrix.clone(),
            working,
            monitor,
            self.solution_limit,
        ))
    }

    /// Like [`AssignmentSolver::solve`], but excludes every worker/task
    /// pair the mask marks as forbidden.
    ///
    /// Additionally fails with a `DimensionError` when the mask shape does
    /// not match the matrix and with an `InfeasibleMaskError` when a worker
    /// or task has no permitted pairing at all.
    pub fn solve_with_forbidden<T, M>(
        &self,
        matrix: &CostMatrix<T>,
        mask: &PermissionMask,
        monitor: M,
    ) -> Result<AssignmentIter<T, M>, ValidationError>
    where
        T: CostNumeric,
        M: SolveMonitor<T>,
    {
        validate_dimensions(matrix)?;
        validate_costs(matrix)?;
        validate_mask(matrix, mask)?;

        let working = square_by_dummy_tasks(&apply_penalty(matrix, mask));
        Ok(AssignmentIter::new(
            matrix.clone(),
            working,
            monitor,
            self.solution_limit,
        ))
    }

    /// Runs the producer to exhaustion and collects the result.
    pub fn solve_all<T, M>(
        &self,
        matrix: &CostMatrix<T>,
        monitor: M,
    ) -> Result<SolveOutcome<T>, ValidationError>
    where
        T: CostNumeric,
        M: SolveMonitor<T>,
    {
        let mut producer = self.solve(matrix, monitor)?;
        let assignments: Vec<_> = producer.by_ref().collect();
        Ok(SolveOutcome::new(assignments, producer.statistics().clone()))
    }

    /// Runs the forbidden-pair producer to exhaustion and collects the
    /// result.
    pub fn solve_all_with_forbidden<T, M>(
        &self,
        matrix: &CostMatrix<T>,
        mask: &PermissionMask,
        monitor: M,
    ) -> Result<SolveOutcome<T>, ValidationError>
    where
        T: CostNumeric,
        M: SolveMonitor<T>,
    {
        let mut producer = self.solve_with_forbidden(matrix, mask, monitor)?;
        let assignments: Vec<_> = producer.by_ref().collect();
        Ok(SolveOutcome::new(assignments, producer.statistics().clone()))
    }
}

/// Builder for [`AssignmentSolver`].
#[derive(Debug, Clone, Default)]
pub struct AssignmentSolverBuilder {
    solution_limit: Option<u64>,
}

impl AssignmentSolverBuilder {
    /// Creates a new builder with default options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the producer after `limit` assignments have been yielded.
    #[inline]
    pub fn with_solution_limit(mut self, limit: u64) -> Self {
        self.solution_limit = Some(limit);
        self
    }

    /// Builds the solver.
    #[inline]
    pub fn build(self) -> AssignmentSolver {
        AssignmentSolver {
            solution_limit: self.solution_limit,
        }
    }
}

/// Convenience entry point: solves `matrix` without a mask or monitor.
pub fn solve_assignment<T>(
    matrix: &CostMatrix<T>,
) -> Result<AssignmentIter<T, NoOperationMonitor<T>>, ValidationError>
where
    T: CostNumeric,
{
    AssignmentSolver::new().solve(matrix, NoOperationMonitor::new())
}

/// Convenience entry point: solves `matrix` under a permission mask,
/// without a monitor.
pub fn solve_assignment_with_forbidden<T>(
    matrix: &CostMatrix<T>,
    mask: &PermissionMask,
) -> Result<AssignmentIter<T, NoOperationMonitor<T>>, ValidationError>
where
    T: CostNumeric,
{
    AssignmentSolver::new().solve_with_forbidden(matrix, mask, NoOperationMonitor::new())
}

/// Appends dummy zero-cost task columns until the matrix is square.
fn square_by_dummy_tasks<T>(matrix: &CostMatrix<T>) -> CostMatrix<T>
where
    T: CostNumeric,
{
    matrix.with_appended_zero_columns(matrix.num_workers() - matrix.num_tasks())
}

/// Replaces every forbidden cell with a penalty strictly greater than the
/// matrix maximum, so no optimal assignment of a feasible instance can use
/// it.
fn apply_penalty<T>(matrix: &CostMatrix<T>, mask: &PermissionMask) -> CostMatrix<T>
where
    T: CostNumeric,
{
    let penalty = matrix.max_value().saturating_add_val(T::one());

    let mut costs = Vec::with_capacity(matrix.num_workers() * matrix.num_tasks());
    for w in 0..matrix.num_workers() {
        let worker_index = WorkerIndex::new(w);
        for (t, &cost) in matrix.row(worker_index).iter().enumerate() {
            let allowed = mask.allows(worker_index, TaskIndex::new(t));
            costs.push(if allowed { cost } else { penalty });
        }
    }

    CostMatrix::new(matrix.num_workers(), matrix.num_tasks(), costs)
}

enum ProducerState<T> {
    /// The Hungarian loop has not run yet; holds the squared, penalized
    /// working matrix.
    Pending(CostMatrix<T>),
    /// The loop reached a perfect matching; assignments stream out of the
    /// enumerator.
    Enumerating(MatchingEnumerator),
    /// Exhausted.
    Done,
}

/// A lazy, pull-based producer of optimal assignments.
///
/// No combinatorial work happens before the first `next()` call; that call
/// runs the Hungarian loop to its perfect matching and starts the
/// enumeration. Dropping the iterator early discards the remaining
/// branch-and-bound stack; there is no state to unwind.
pub struct AssignmentIter<T, M>
where
    T: CostNumeric,
    M: SolveMonitor<T>,
{
    /// The caller's matrix, unpadded and unpenalized; assignment costs are
    /// summed from it.
    original: CostMatrix<T>,
    state: ProducerState<T>,
    monitor: M,
    stats: SolveStatistics,
    start_time: std::time::Instant,
    solution_limit: Option<u64>,
    /// Slot vectors already handed out. Distinct padded matchings collapse
    /// to the same real assignment when idle workers permute among two or
    /// more dummy columns; those repeats are filtered here.
    seen: FxHashSet<Vec<TaskSlot>>,
    exit_reported: bool,
}

impl<T, M> std::fmt::Debug for AssignmentIter<T, M>
where
    T: CostNumeric,
    M: SolveMonitor<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssignmentIter")
            .field("solution_limit", &self.solution_limit)
            .field("exit_reported", &self.exit_reported)
            .finish_non_exhaustive()
    }
}

impl<T, M> AssignmentIter<T, M>
where
    T: CostNumeric,
    M: SolveMonitor<T>,
{
    fn new(
        original: CostMatrix<T>,
        working: CostMatrix<T>,
        mut monitor: M,
        solution_limit: Option<u64>,
    ) -> Self {
        monitor.on_enter_solve(&working);

        Self {
            original,
            state: ProducerState::Pending(working),
            monitor,
            stats: SolveStatistics::default(),
            start_time: std::time::Instant::now(),
            solution_limit,
            seen: FxHashSet::default(),
            exit_reported: false,
        }
    }

    /// Returns the statistics gathered so far.
    #[inline]
    pub fn statistics(&self) -> &SolveStatistics {
        &self.stats
    }

    /// Returns the monitor.
    #[inline]
    pub fn monitor(&self) -> &M {
        &self.monitor
    }

    /// Consumes the producer, returning the monitor.
    #[inline]
    pub fn into_monitor(self) -> M {
        self.monitor
    }

    /// Runs the Hungarian loop until the zero graph admits a perfect
    /// matching, then installs the enumerator. A loop that cannot produce
    /// any matching at all ends the producer with zero results.
    fn run_hungarian_loop(&mut self, mut matrix: CostMatrix<T>) {
        let required_size = matrix.num_workers();
        let mut iteration = 0u64;

        loop {
            iteration += 1;
            self.stats.on_iteration();
            self.monitor.on_iteration(iteration, &matrix);

            let reduced = reduce(&matrix);
            self.monitor.on_reduced(&reduced);

            let graph = ZeroGraph::from_matrix(&reduced);
            let matching = maximum_matching(&graph);
            self.stats.on_matching_computed();
            self.monitor.on_matching(matching.len(), required_size);

            // Defensive: a reduced matrix always has zeros, so an empty
            // matching should be unreachable for validated input. An empty
            // result sequence is the non-error answer if it ever happens.
            if matching.is_empty() {
                self.finish();
                return;
            }

            if matching.saturates_left_side(required_size) {
                self.state = ProducerState::Enumerating(MatchingEnumerator::new(graph, matching));
                return;
            }

            let cover = find_min_vertex_cover(&graph, &matching);
            self.stats.on_cover_computed();
            self.monitor.on_cover(&cover);
            debug_assert_eq!(
                cover.size(),
                matching.len(),
                "minimum vertex cover size must equal the maximum matching size"
            );

            matrix = reduce_by_cover(&reduced, &cover);
            self.stats.on_rereduction();
        }
    }

    /// Translates an enumerated matching into an assignment over the
    /// original matrix, stripping dummy-task pairs.
    fn build_assignment(&self, matching: &Matching) -> Assignment<T> {
        let num_workers = self.original.num_workers();
        let num_real_tasks = self.original.num_tasks();

        let mut slots = vec![TaskSlot::none(); num_workers];
        let mut total_cost = T::zero();
        for (right_vertex, left_vertex) in matching.iter() {
            let task = right_vertex - num_workers;
            if task < num_real_tasks {
                slots[left_vertex] = TaskSlot::some(TaskIndex::new(task));
                total_cost = total_cost
                    + self
                        .original
                        .cost(WorkerIndex::new(left_vertex), TaskIndex::new(task));
            }
        }

        Assignment::new(slots, total_cost)
    }

    /// Ends production: folds enumeration counters into the statistics and
    /// reports the exit event exactly once.
    fn finish(&mut self) {
        if let ProducerState::Enumerating(enumerator) = &self.state {
            self.stats.add_frames_explored(enumerator.frames_explored());
            self.stats.add_matchings_computed(enumerator.rematches());
        }
        self.state = ProducerState::Done;

        if !self.exit_reported {
            self.exit_reported = true;
            self.stats.set_total_time(self.start_time.elapsed());
            self.monitor.on_exit_solve(&self.stats);
        }
    }
}

impl<T, M> Iterator for AssignmentIter<T, M>
where
    T: CostNumeric,
    M: SolveMonitor<T>,
{
    type Item = Assignment<T>;

    fn next(&mut self) -> Option<Assignment<T>> {
        loop {
            match &mut self.state {
                ProducerState::Pending(_) => {
                    let ProducerState::Pending(matrix) =
                        std::mem::replace(&mut self.state, ProducerState::Done)
                    else {
                        unreachable!();
                    };
                    self.run_hungarian_loop(matrix);
                }
                ProducerState::Enumerating(enumerator) => {
                    if let Some(limit) = self.solution_limit {
                        if self.stats.assignments_yielded >= limit {
                            self.finish();
                            return None;
                        }
                    }

                    match enumerator.next() {
                        Some(matching) => {
                            let assignment = self.build_assignment(&matching);
                            if !self.seen.insert(assignment.slots().to_vec()) {
                                continue;
                            }
                            self.stats.on_assignment_yielded();
                            self.monitor.on_assignment(&assignment);
                            return Some(assignment);
                        }
                        None => {
                            self.finish();
                            return None;
                        }
                    }
                }
                ProducerState::Done => return None,
            }
        }
    }
}
