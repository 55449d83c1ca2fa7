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
    index::{TaskIndex, WorkerIndex},
    slot::TaskSlot,
};
use num_traits::PrimInt;

/// One optimal solution to the assignment problem.
///
/// Slot `i` holds the task assigned to worker `i`, or an empty slot when the
/// worker received a dummy (padding) task and therefore has no real work.
/// The total cost sums the matrix entries of the real pairs only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assignment<T> {
    /// The assigned task for each worker.
    /// `tasks[w]` is the task assigned to worker `w`.
    tasks: Vec<TaskSlot>,

    /// The total cost of this assignment over real worker/task pairs.
    total_cost: T,
}

impl<T> Assignment<T>
where
    T: PrimInt,
{
    /// Constructs a new `Assignment`.
    ///
    /// # Panics
    ///
    /// Panics if `tasks` is empty or two workers hold the same task.
    pub fn new(tasks: Vec<TaskSlot>, total_cost: T) -> Self {
        assert!(
            !tasks.is_empty(),
            "called `Assignment::new` with no workers"
        );

        let mut seen: Vec<TaskIndex> = tasks.iter().filter_map(|slot| slot.into_option()).collect();
        seen.sort_unstable();
        assert!(
            seen.windows(2).all(|pair| pair[0] != pair[1]),
            "called `Assignment::new` with a task assigned to two workers"
        );

        Self { tasks, total_cost }
    }

    /// Returns the task assigned to a specific worker, or `None` when the
    /// worker holds a dummy task.
    ///
    /// # Panics
    ///
    /// Panics if `worker_index` is out of bounds.
    #[inline]
    pub fn task_for_worker(&self, worker_index: WorkerIndex) -> Option<TaskIndex> {
        let index = worker_index.get();
        assert!(
            index < self.num_workers(),
            "called `Assignment::task_for_worker` with worker index out of bounds: the len is {} but the index is {}",
            self.num_workers(),
            index
        );

        self.tasks[index].into_option()
    }

    /// Returns the number of workers covered by this assignment.
    #[inline]
    pub fn num_workers(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of workers holding a real task.
    #[inline]
    pub fn num_assigned(&self) -> usize {
        self.tasks.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns the total cost of this assignment.
    #[inline]
    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// Returns a slice of per-worker task slots.
    #[inline]
    pub fn slots(&self) -> &[TaskSlot] {
        &self.tasks
    }

    /// Iterates over the real worker/task pairs in worker order.
    pub fn iter(&self) -> impl Iterator<Item = (WorkerIndex, TaskIndex)> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .filter_map(|(w, slot)| slot.into_option().map(|t| (WorkerIndex::new(w), t)))
    }
}

impl<T> std::fmt::Display for Assignment<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Assignment Summary")?;
        writeln!(f, "   Total Cost: {}", self.total_cost)?;
        writeln!(f)?;
        writeln!(f, "   {:<10} | {:<10}", "Worker", "Task")?;
        writeln!(f, "   {:-<10}-+-{:-<10}", "", "")?;
        for (w, slot) in self.tasks.iter().enumerate() {
            writeln!(f, "   {:<10} | {:<10}", w, slot)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(i: usize) -> TaskSlot {
        TaskSlot::some(TaskIndex::new(i))
    }

    #[test]
    fn test_new_and_basic_accessors() {
        let a = Assignment::new(vec![slot(2), slot(0), slot(1)], 11i64);

        assert_eq!(a.num_workers(), 3);
        assert_eq!(a.num_assigned(), 3);
        assert_eq!(a.total_cost(), 11);

        assert_eq!(a.task_for_worker(WorkerIndex::new(0)), Some(TaskIndex::new(2)));
        assert_eq!(a.task_for_worker(WorkerIndex::new(1)), Some(TaskIndex::new(0)));
        assert_eq!(a.task_for_worker(WorkerIndex::new(2)), Some(TaskIndex::new(1)));
    }

    #[test]
    fn test_dummy_slots_are_skipped() {
        let a = Assignment::new(vec![slot(0), TaskSlot::none(), slot(1)], 7u64);

        assert_eq!(a.num_workers(), 3);
        assert_eq!(a.num_assigned(), 2);
        assert_eq!(a.task_for_worker(WorkerIndex::new(1)), None);

        let pairs: Vec<_> = a.iter().map(|(w, t)| (w.get(), t.get())).collect();
        assert_eq!(pairs, vec![(0, 0), (2, 1)]);
    }

    #[test]
    #[should_panic(expected = "called `Assignment::new` with a task assigned to two workers")]
    fn test_new_panics_on_duplicate_task() {
        let _ = Assignment::new(vec![slot(1), slot(1)], 0i64);
    }

    #[test]
    #[should_panic(expected = "called `Assignment::new` with no workers")]
    fn test_new_panics_on_empty() {
        let _ = Assignment::<i64>::new(Vec::new(), 0);
    }

    #[test]
    fn test_equality_and_hash_distinguish_mappings() {
        use std::collections::HashSet;

        let a = Assignment::new(vec![slot(0), slot(1)], 5u32);
        let b = Assignment::new(vec![slot(1), slot(0)], 5u32);
        let c = Assignment::new(vec![slot(0), slot(1)], 5u32);

        assert_eq!(a, c);
        assert_ne!(a, b);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_formatting_example() {
        let a = Assignment::new(vec![slot(1), TaskSlot::none()], 4i64);
        let displayed = format!("{}", a);

        assert!(displayed.contains("Total Cost: 4"));
        assert!(displayed.contains("Worker"));
        assert!(displayed.contains("Task"));
        assert!(displayed.contains("-"));
    }
}
