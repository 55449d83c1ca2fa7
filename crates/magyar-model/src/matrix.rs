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

use crate::index::{TaskIndex, WorkerIndex};
use num_traits::PrimInt;

#[inline(always)]
fn flatten_index(num_tasks: usize, worker_index: WorkerIndex, task_index: TaskIndex) -> usize {
    worker_index.get() * num_tasks + task_index.get()
}

/// A rectangular cost matrix: `num_workers` rows by `num_tasks` columns.
///
/// Costs are stored in a flat row-major vector. The matrix is an immutable
/// value; every reduction step in the engine allocates a fresh matrix rather
/// than mutating in place.
///
/// Cell `(w, t)` holds the cost of assigning worker `w` to task `t`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostMatrix<T> {
    num_workers: usize,
    num_tasks: usize,
    costs: Vec<T>, // len = num_workers * num_tasks
}

impl<T> CostMatrix<T>
where
    T: PrimInt,
{
    /// Constructs a matrix from a flat row-major cost vector.
    ///
    /// # Panics
    ///
    /// Panics if the matrix would be empty or `costs.len()` does not equal
    /// `num_workers * num_tasks`.
    pub fn new(num_workers: usize, num_tasks: usize, costs: Vec<T>) -> Self {
        assert!(
            num_workers > 0 && num_tasks > 0,
            "called `CostMatrix::new` with an empty shape: {} x {}",
            num_workers,
            num_tasks
        );
        assert_eq!(
            costs.len(),
            num_workers * num_tasks,
            "called `CostMatrix::new` with inconsistent data length: expected {} entries, got {}",
            num_workers * num_tasks,
            costs.len()
        );

        Self {
            num_workers,
            num_tasks,
            costs,
        }
    }

    /// Constructs a matrix from row slices.
    ///
    /// # Panics
    ///
    /// Panics if there are no rows, a row is empty, or the rows have
    /// different lengths.
    pub fn from_rows(rows: &[Vec<T>]) -> Self {
        assert!(
            !rows.is_empty(),
            "called `CostMatrix::from_rows` with no rows"
        );

        let num_tasks = rows[0].len();
        assert!(
            rows.iter().all(|row| row.len() == num_tasks),
            "called `CostMatrix::from_rows` with rows of differing lengths"
        );

        let costs = rows.iter().flatten().copied().collect();
        Self::new(rows.len(), num_tasks, costs)
    }

    /// Returns the number of workers (rows).
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Returns the number of tasks (columns).
    #[inline]
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Returns `true` if the matrix has as many tasks as workers.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.num_workers == self.num_tasks
    }

    /// Returns the cost of assigning `worker_index` to `task_index`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn cost(&self, worker_index: WorkerIndex, task_index: TaskIndex) -> T {
        assert!(
            worker_index.get() < self.num_workers && task_index.get() < self.num_tasks,
            "called `CostMatrix::cost` with index out of bounds: the shape is {}x{} but the index is ({}, {})",
            self.num_workers,
            self.num_tasks,
            worker_index.get(),
            task_index.get()
        );

        self.costs[flatten_index(self.num_tasks, worker_index, task_index)]
    }

    /// Returns the cost without bounds checking.
    ///
    /// # Safety
    ///
    /// Both indices must be in bounds for this matrix.
    #[inline]
    pub unsafe fn cost_unchecked(&self, worker_index: WorkerIndex, task_index: TaskIndex) -> T {
        let flat_index = flatten_index(self.num_tasks, worker_index, task_index);
        debug_assert!(
            flat_index < self.costs.len(),
            "called `CostMatrix::cost_unchecked` with flat index out of bounds: the len is {} but the index is {}",
            self.costs.len(),
            flat_index
        );

        unsafe { *self.costs.get_unchecked(flat_index) }
    }

    /// Returns the row of costs for a single worker.
    ///
    /// # Panics
    ///
    /// Panics if `worker_index` is out of bounds.
    #[inline]
    pub fn row(&self, worker_index: WorkerIndex) -> &[T] {
        let start = worker_index.get() * self.num_tasks;
        &self.costs[start..start + self.num_tasks]
    }

    /// Returns the flat row-major cost slice.
    #[inline]
    pub fn costs(&self) -> &[T] {
        &self.costs
    }

    /// Returns the smallest cost in the matrix.
    #[inline]
    pub fn min_value(&self) -> T {
        // The constructor forbids empty matrices.
        self.costs
            .iter()
            .copied()
            .fold(self.costs[0], |acc, v| acc.min(v))
    }

    /// Returns the largest cost in the matrix.
    #[inline]
    pub fn max_value(&self) -> T {
        self.costs
            .iter()
            .copied()
            .fold(self.costs[0], |acc, v| acc.max(v))
    }

    /// Returns a new matrix with `extra` zero-cost columns appended to the
    /// right. Used to square a matrix that has fewer tasks than workers;
    /// the added columns represent dummy tasks.
    pub fn with_appended_zero_columns(&self, extra: usize) -> Self {
        if extra == 0 {
            return self.clone();
        }

        let new_tasks = self.num_tasks + extra;
        let mut costs = Vec::with_capacity(self.num_workers * new_tasks);
        for w in 0..self.num_workers {
            costs.extend_from_slice(self.row(WorkerIndex::new(w)));
            costs.extend(std::iter::repeat(T::zero()).take(extra));
        }

        Self::new(self.num_workers, new_tasks, costs)
    }
}

impl<T> std::fmt::Display for CostMatrix<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for w in 0..self.num_workers {
            if w > 0 {
                writeln!(f)?;
            }
            for (t, cost) in self.row(WorkerIndex::new(w)).iter().enumerate() {
                if t > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", cost)?;
            }
        }
        Ok(())
    }
}
