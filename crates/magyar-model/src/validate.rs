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

//! Eager input validation for the assignment solver.
//!
//! Every solver entry point runs these checks before any computation
//! begins. Once a matrix and mask have passed validation, the engine is
//! total: no further errors can occur while assignments are produced.

use crate::{
    index::{TaskIndex, WorkerIndex},
    mask::PermissionMask,
    matrix::CostMatrix,
};
use num_traits::PrimInt;

/// The error type for solver input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The matrix or mask shapes are unusable.
    Dimension(DimensionError),
    /// The cost matrix contains an invalid entry.
    InvalidMatrix(InvalidMatrixError),
    /// The permission mask leaves a worker or task without any pairing.
    InfeasibleMask(InfeasibleMaskError),
}

/// Details about an unusable shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    /// There are more tasks than workers; the solver squares matrices by
    /// adding dummy tasks, never dummy workers.
    TaskCountExceedsWorkerCount {
        num_workers: usize,
        num_tasks: usize,
    },
    /// The cost matrix and the permission mask have different shapes.
    ShapeMismatch {
        matrix_shape: (usize, usize),
        mask_shape: (usize, usize),
    },
}

impl std::fmt::Display for DimensionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskCountExceedsWorkerCount {
                num_workers,
                num_tasks,
            } => write!(
                f,
                "Task count {} must be less than or equal to worker count {}",
                num_tasks, num_workers
            ),
            Self::ShapeMismatch {
                matrix_shape,
                mask_shape,
            } => write!(
                f,
                "Cost matrix shape {}x{} does not match mask shape {}x{}",
                matrix_shape.0, matrix_shape.1, mask_shape.0, mask_shape.1
            ),
        }
    }
}

impl std::error::Error for DimensionError {}

/// Details about an invalid cost entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMatrixError {
    /// The row of the offending entry.
    pub worker_index: WorkerIndex,
    /// The column of the offending entry.
    pub task_index: TaskIndex,
}

impl std::fmt::Display for InvalidMatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Negative cost entry at worker {}, task {}",
            self.worker_index.get(),
            self.task_index.get()
        )
    }
}

impl std::error::Error for InvalidMatrixError {}

/// Details about a mask that leaves one side unassignable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfeasibleMaskError {
    /// Every pairing for this worker is forbidden.
    WorkerFullyForbidden { worker_index: WorkerIndex },
    /// Every pairing for this task is forbidden.
    TaskFullyForbidden { task_index: TaskIndex },
}

impl std::fmt::Display for InfeasibleMaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WorkerFullyForbidden { worker_index } => write!(
                f,
                "Worker {} has no permitted task",
                worker_index.get()
            ),
            Self::TaskFullyForbidden { task_index } => {
                write!(f, "Task {} has no permitted worker", task_index.get())
            }
        }
    }
}

impl std::error::Error for InfeasibleMaskError {}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dimension(e) => write!(f, "Dimension error: {}", e),
            Self::InvalidMatrix(e) => write!(f, "Invalid matrix: {}", e),
            Self::InfeasibleMask(e) => write!(f, "Infeasible mask: {}", e),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<DimensionError> for ValidationError {
    fn from(e: DimensionError) -> Self {
        ValidationError::Dimension(e)
    }
}

impl From<InvalidMatrixError> for ValidationError {
    fn from(e: InvalidMatrixError) -> Self {
        ValidationError::InvalidMatrix(e)
    }
}

impl From<InfeasibleMaskError> for ValidationError {
    fn from(e: InfeasibleMaskError) -> Self {
        ValidationError::InfeasibleMask(e)
    }
}

/// Checks that the matrix has no more tasks than workers.
pub fn validate_dimensions<T>(matrix: &CostMatrix<T>) -> Result<(), ValidationError>
where
    T: PrimInt,
{
    if matrix.num_tasks() > matrix.num_workers() {
        return Err(DimensionError::TaskCountExceedsWorkerCount {
            num_workers: matrix.num_workers(),
            num_tasks: matrix.num_tasks(),
        }
        .into());
    }

    Ok(())
}

/// Checks that every cost entry is non-negative.
///
/// For unsigned cost types this never fails; it exists so the solver can
/// also accept signed integer matrices.
pub fn validate_costs<T>(matrix: &CostMatrix<T>) -> Result<(), ValidationError>
where
    T: PrimInt,
{
    for w in 0..matrix.num_workers() {
        let worker_index = WorkerIndex::new(w);
        for (t, &cost) in matrix.row(worker_index).iter().enumerate() {
            if cost < T::zero() {
                return Err(InvalidMatrixError {
                    worker_index,
                    task_index: TaskIndex::new(t),
                }
                .into());
            }
        }
    }

    Ok(())
}

/// Checks that the mask matches the matrix shape and leaves every worker
/// and every task with at least one permitted pairing.
pub fn validate_mask<T>(
    matrix: &CostMatrix<T>,
    mask: &PermissionMask,
) -> Result<(), ValidationError>
where
    T: PrimInt,
{
    if matrix.num_workers() != mask.num_workers() || matrix.num_tasks() != mask.num_tasks() {
        return Err(DimensionError::ShapeMismatch {
            matrix_shape: (matrix.num_workers(), matrix.num_tasks()),
            mask_shape: (mask.num_workers(), mask.num_tasks()),
        }
        .into());
    }

    if let Some(worker_index) = mask.first_fully_forbidden_worker() {
        return Err(InfeasibleMaskError::WorkerFullyForbidden { worker_index }.into());
    }

    if let Some(task_index) = mask.first_fully_forbidden_task() {
        return Err(InfeasibleMaskError::TaskFullyForbidden { task_index }.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimensions_accepts_square_and_wide_worker_side() {
        let square = CostMatrix::from_rows(&[vec![1i64, 2], vec![3, 4]]);
        assert!(validate_dimensions(&square).is_ok());

        let more_workers = CostMatrix::from_rows(&[vec![1i64], vec![2], vec![3]]);
        assert!(validate_dimensions(&more_workers).is_ok());
    }

    #[test]
    fn test_validate_dimensions_rejects_more_tasks_than_workers() {
        let wide = CostMatrix::from_rows(&[vec![1i64, 2, 3], vec![4, 5, 6]]);
        let err = validate_dimensions(&wide).unwrap_err();

        assert_eq!(
            err,
            ValidationError::Dimension(DimensionError::TaskCountExceedsWorkerCount {
                num_workers: 2,
                num_tasks: 3,
            })
        );
    }

    #[test]
    fn test_validate_costs_rejects_negative_entry() {
        let matrix = CostMatrix::from_rows(&[vec![1i64, 2], vec![-3, 4]]);
        let err = validate_costs(&matrix).unwrap_err();

        assert_eq!(
            err,
            ValidationError::InvalidMatrix(InvalidMatrixError {
                worker_index: WorkerIndex::new(1),
                task_index: TaskIndex::new(0),
            })
        );
    }

    #[test]
    fn test_validate_costs_accepts_unsigned() {
        let matrix = CostMatrix::from_rows(&[vec![0u64, 2], vec![3, 4]]);
        assert!(validate_costs(&matrix).is_ok());
    }

    #[test]
    fn test_validate_mask_rejects_shape_mismatch() {
        let matrix = CostMatrix::from_rows(&[vec![1u64, 2], vec![3, 4]]);
        let mask = PermissionMask::all_allowed(2, 3);
        let err = validate_mask(&matrix, &mask).unwrap_err();

        assert!(matches!(
            err,
            ValidationError::Dimension(DimensionError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_mask_rejects_forbidden_worker_row() {
        let matrix = CostMatrix::from_rows(&[vec![1u64, 2], vec![3, 4]]);
        let mask = PermissionMask::from_rows(&[vec![false, false], vec![true, true]]);
        let err = validate_mask(&matrix, &mask).unwrap_err();

        assert_eq!(
            err,
            ValidationError::InfeasibleMask(InfeasibleMaskError::WorkerFullyForbidden {
                worker_index: WorkerIndex::new(0),
            })
        );
    }

    #[test]
    fn test_validate_mask_rejects_forbidden_task_column() {
        let matrix = CostMatrix::from_rows(&[vec![1u64, 2], vec![3, 4]]);
        let mask = PermissionMask::from_rows(&[vec![true, false], vec![true, false]]);
        let err = validate_mask(&matrix, &mask).unwrap_err();

        assert_eq!(
            err,
            ValidationError::InfeasibleMask(InfeasibleMaskError::TaskFullyForbidden {
                task_index: TaskIndex::new(1),
            })
        );
    }

    #[test]
    fn test_error_display_messages() {
        let err: ValidationError = DimensionError::TaskCountExceedsWorkerCount {
            num_workers: 2,
            num_tasks: 3,
        }
        .into();
        assert_eq!(
            format!("{}", err),
            "Dimension error: Task count 3 must be less than or equal to worker count 2"
        );

        let err: ValidationError = InfeasibleMaskError::WorkerFullyForbidden {
            worker_index: WorkerIndex::new(5),
        }
        .into();
        assert_eq!(
            format!("{}", err),
            "Infeasible mask: Worker 5 has no permitted task"
        );
    }
}
