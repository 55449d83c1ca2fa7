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

use crate::index::TaskIndex;

/// A task index that may be absent.
///
/// Instead of `Option<TaskIndex>`, this type uses a sentinel encoding to
/// keep per-worker assignment storage to a single machine word in dense
/// collections.
///
/// Encoding:
/// - Values below `usize::MAX` represent a concrete task index.
/// - `usize::MAX` is reserved to indicate absence (the worker holds a
///   dummy task).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskSlot(usize);

impl TaskSlot {
    const NONE_SENTINEL: usize = usize::MAX;

    /// Creates a `TaskSlot` holding a concrete task.
    ///
    /// # Panics
    ///
    /// Panics if the task index equals the sentinel value.
    pub fn some(task_index: TaskIndex) -> Self {
        assert!(
            task_index.get() != Self::NONE_SENTINEL,
            "called `TaskSlot::some` with the reserved sentinel index"
        );

        TaskSlot(task_index.get())
    }

    /// Creates an empty `TaskSlot`.
    #[inline]
    pub const fn none() -> Self {
        TaskSlot(Self::NONE_SENTINEL)
    }

    /// Creates a `TaskSlot` from an `Option<TaskIndex>`.
    #[inline]
    pub fn from_option(value: Option<TaskIndex>) -> Self {
        match value {
            Some(task_index) => Self::some(task_index),
            None => Self::none(),
        }
    }

    /// Checks whether the slot is empty.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.0 == Self::NONE_SENTINEL
    }

    /// Checks whether the slot holds a task.
    #[inline]
    pub const fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Converts the slot back into an `Option<TaskIndex>`.
    #[inline]
    pub fn into_option(self) -> Option<TaskIndex> {
        if self.is_none() {
            None
        } else {
            Some(TaskIndex::new(self.0))
        }
    }

    /// Unwraps the slot, panicking if it is empty.
    ///
    /// # Panics
    ///
    /// Panics if the slot does not hold a task.
    pub fn unwrap(self) -> TaskIndex {
        if self.is_none() {
            panic!("called `TaskSlot::unwrap()` on an empty slot")
        }
        TaskIndex::new(self.0)
    }
}

impl std::fmt::Debug for TaskSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "TaskSlot(None)")
        } else {
            write!(f, "TaskSlot({})", self.0)
        }
    }
}

impl std::fmt::Display for TaskSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "-")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<Option<TaskIndex>> for TaskSlot {
    #[inline]
    fn from(value: Option<TaskIndex>) -> Self {
        TaskSlot::from_option(value)
    }
}

impl From<TaskSlot> for Option<TaskIndex> {
    #[inline]
    fn from(val: TaskSlot) -> Self {
        val.into_option()
    }
}
