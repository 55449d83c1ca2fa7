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

/// A boolean mask over worker/task pairs: `true` means the pair is allowed,
/// `false` means it is forbidden.
///
/// Same shape as the cost matrix it accompanies; shape agreement is checked
/// during solver validation, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermissionMask {
    num_workers: usize,
    num_tasks: usize,
    allowed: Vec<bool>, // len = num_workers * num_tasks, row-major
}

impl PermissionMask {
    /// Constructs a mask from a flat row-major vector.
    ///
    /// # Panics
    ///
    /// Panics if the mask would be empty or `allowed.len()` does not equal
    /// `num_workers * num_tasks`.
    pub fn new(num_workers: usize, num_tasks: usize, allowed: Vec<bool>) -> Self {
        assert!(
            num_workers > 0 && num_tasks > 0,
            "called `PermissionMask::new` with an empty shape: {} x {}",
            num_workers,
            num_tasks
        );
        assert_eq!(
            allowed.len(),
            num_workers * num_tasks,
            "called `PermissionMask::new` with inconsistent data length: expected {} entries, got {}",
            num_workers * num_tasks,
            allowed.len()
        );

        Self {
            num_workers,
            num_tasks,
            allowed,
        }
    }

    /// Constructs a mask from row slices.
    ///
    /// # Panics
    ///
    /// Panics if there are no rows, a row is empty, or the rows have
    /// different lengths.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        assert!(
            !rows.is_empty(),
            "called `PermissionMask::from_rows` with no rows"
        );

        let num_tasks = rows[0].len();
        assert!(
            rows.iter().all(|row| row.len() == num_tasks),
            "called `PermissionMask::from_rows` with rows of differing lengths"
        );

        let allowed = rows.iter().flatten().copied().collect();
        Self::new(rows.len(), num_tasks, allowed)
    }

    /// Constructs a mask that allows every pair.
    pub fn all_allowed(num_workers: usize, num_tasks: usize) -> Self {
        Self::new(num_workers, num_tasks, vec![true; num_workers * num_tasks])
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

    /// Returns `true` if the pair is allowed.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn allows(&self, worker_index: WorkerIndex, task_index: TaskIndex) -> bool {
        assert!(
            worker_index.get() < self.num_workers && task_index.get() < self.num_tasks,
            "called `PermissionMask::allows` with index out of bounds: the shape is {}x{} but the index is ({}, {})",
            self.num_workers,
            self.num_tasks,
            worker_index.get(),
            task_index.get()
        );

        self.allowed[worker_index.get() * self.num_tasks + task_index.get()]
    }

    /// Returns the first worker whose row is entirely forbidden, if any.
    pub fn first_fully_forbidden_worker(&self) -> Option<WorkerIndex> {
        (0..self.num_workers)
            .map(WorkerIndex::new)
            .find(|&w| (0..self.num_tasks).all(|t| !self.allows(w, TaskIndex::new(t))))
    }

    /// Returns the first task whose column is entirely forbidden, if any.
    pub fn first_fully_forbidden_task(&self) -> Option<TaskIndex> {
        (0..self.num_tasks)
            .map(TaskIndex::new)
            .find(|&t| (0..self.num_workers).all(|w| !self.allows(WorkerIndex::new(w), t)))
    }
}

impl std::fmt::Display for PermissionMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for w in 0..self.num_workers {
            if w > 0 {
                writeln!(f)?;
            }
            for t in 0..self.num_tasks {
                if t > 0 {
                    write!(f, "\t")?;
                }
                let allowed = self.allows(WorkerIndex::new(w), TaskIndex::new(t));
                write!(f, "{}", if allowed { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wi(i: usize) -> WorkerIndex {
        WorkerIndex::new(i)
    }

    fn ti(i: usize) -> TaskIndex {
        TaskIndex::new(i)
    }

    #[test]
    fn test_from_rows_and_allows() {
        let mask = PermissionMask::from_rows(&[vec![true, false], vec![false, true]]);
        assert!(mask.allows(wi(0), ti(0)));
        assert!(!mask.allows(wi(0), ti(1)));
        assert!(!mask.allows(wi(1), ti(0)));
        assert!(mask.allows(wi(1), ti(1)));
    }

    #[test]
    fn test_all_allowed() {
        let mask = PermissionMask::all_allowed(2, 3);
        for w in 0..2 {
            for t in 0..3 {
                assert!(mask.allows(wi(w), ti(t)));
            }
        }
        assert_eq!(mask.first_fully_forbidden_worker(), None);
        assert_eq!(mask.first_fully_forbidden_task(), None);
    }

    #[test]
    fn test_fully_forbidden_worker_detected() {
        let mask = PermissionMask::from_rows(&[
            vec![true, true],
            vec![false, false],
        ]);
        assert_eq!(mask.first_fully_forbidden_worker(), Some(wi(1)));
        assert_eq!(mask.first_fully_forbidden_task(), None);
    }

    #[test]
    fn test_fully_forbidden_task_detected() {
        let mask = PermissionMask::from_rows(&[
            vec![true, false],
            vec![true, false],
        ]);
        assert_eq!(mask.first_fully_forbidden_worker(), None);
        assert_eq!(mask.first_fully_forbidden_task(), Some(ti(1)));
    }

    #[test]
    #[should_panic(expected = "called `PermissionMask::from_rows` with rows of differing lengths")]
    fn test_from_rows_panics_on_jagged_input() {
        let _ = PermissionMask::from_rows(&[vec![true], vec![true, false]]);
    }

    #[test]
    fn test_display_renders_zeros_and_ones() {
        let mask = PermissionMask::from_rows(&[vec![true, false], vec![false, true]]);
        assert_eq!(format!("{}", mask), "1\t0\n0\t1");
    }
}
