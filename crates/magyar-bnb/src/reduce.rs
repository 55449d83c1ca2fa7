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

//! Matrix reduction steps of the Hungarian method.
//!
//! All functions are pure and total: each returns a freshly allocated
//! matrix and never aliases or mutates its input.

use crate::cover::VertexCover;
use magyar_model::{index::WorkerIndex, matrix::CostMatrix};
use num_traits::PrimInt;

/// Subtracts each row's minimum from every entry in that row.
pub fn reduce_rows<T>(matrix: &CostMatrix<T>) -> CostMatrix<T>
where
    T: PrimInt,
{
    let mut costs = Vec::with_capacity(matrix.num_workers() * matrix.num_tasks());
    for w in 0..matrix.num_workers() {
        let row = matrix.row(WorkerIndex::new(w));
        let min = row.iter().copied().fold(row[0], |acc, v| acc.min(v));
        costs.extend(row.iter().map(|&cost| cost - min));
    }

    CostMatrix::new(matrix.num_workers(), matrix.num_tasks(), costs)
}

/// Subtracts each column's minimum from every entry in that column.
pub fn reduce_columns<T>(matrix: &CostMatrix<T>) -> CostMatrix<T>
where
    T: PrimInt,
{
    let num_tasks = matrix.num_tasks();
    let mut column_mins = matrix.row(WorkerIndex::new(0)).to_vec();
    for w in 1..matrix.num_workers() {
        for (t, &cost) in matrix.row(WorkerIndex::new(w)).iter().enumerate() {
            column_mins[t] = column_mins[t].min(cost);
        }
    }

    let mut costs = Vec::with_capacity(matrix.num_workers() * num_tasks);
    for w in 0..matrix.num_workers() {
        costs.extend(
            matrix
                .row(WorkerIndex::new(w))
                .iter()
                .enumerate()
                .map(|(t, &cost)| cost - column_mins[t]),
        );
    }

    CostMatrix::new(matrix.num_workers(), num_tasks, costs)
}

/// Full reduction: rows first, then columns. Afterwards every row and
/// every column contains at least one zero.
pub fn reduce<T>(matrix: &CostMatrix<T>) -> CostMatrix<T>
where
    T: PrimInt,
{
    reduce_columns(&reduce_rows(matrix))
}

/// Produces the next candidate matrix from a minimum vertex cover.
///
/// The minimum over uncovered cells (row not in L⁻, column not in R⁺) is
/// subtracted from every cell and added back to every cell in a covered row
/// and every cell in a covered column; doubly covered cells therefore gain
/// it twice. When no uncovered cell exists the matrix is returned
/// unchanged.
pub fn reduce_by_cover<T>(matrix: &CostMatrix<T>, cover: &VertexCover) -> CostMatrix<T>
where
    T: PrimInt,
{
    let mut uncovered_min: Option<T> = None;
    for w in 0..matrix.num_workers() {
        if cover.covers_row(w) {
            continue;
        }
        for (t, &cost) in matrix.row(WorkerIndex::new(w)).iter().enumerate() {
            if cover.covers_column(t) {
                continue;
            }
            uncovered_min = Some(match uncovered_min {
                Some(current) => current.min(cost),
                None => cost,
            });
        }
    }

    let Some(min) = uncovered_min else {
        return matrix.clone();
    };

    let mut costs = Vec::with_capacity(matrix.num_workers() * matrix.num_tasks());
    for w in 0..matrix.num_workers() {
        let row_covered = cover.covers_row(w);
        for (t, &cost) in matrix.row(WorkerIndex::new(w)).iter().enumerate() {
            // Add the covered contributions before subtracting so unsigned
            // cost types never dip below zero.
            let mut value = cost;
            if row_covered {
                value = value + min;
            }
            if cover.covers_column(t) {
                value = value + min;
            }
            costs.push(value - min);
        }
    }

    CostMatrix::new(matrix.num_workers(), matrix.num_tasks(), costs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_reduce_rows_subtracts_row_minima() {
        let m = CostMatrix::from_rows(&[vec![3i64, 4, 6], vec![2, 2, 5]]);
        let reduced = reduce_rows(&m);

        assert_eq!(reduced.costs(), &[0, 1, 3, 0, 0, 3]);
        // Input is untouched.
        assert_eq!(m.costs(), &[3, 4, 6, 2, 2, 5]);
    }

    #[test]
    fn test_reduce_columns_subtracts_column_minima() {
        let m = CostMatrix::from_rows(&[vec![3i64, 4], vec![2, 6]]);
        let reduced = reduce_columns(&m);

        assert_eq!(reduced.costs(), &[1, 0, 0, 2]);
    }

    #[test]
    fn test_reduce_leaves_zero_in_every_row_and_column() {
        let m = CostMatrix::from_rows(&[vec![7u64, 9, 8], vec![12, 10, 14], vec![8, 8, 11]]);
        let reduced = reduce(&m);

        for w in 0..3 {
            assert!(reduced.row(WorkerIndex::new(w)).contains(&0));
        }
        for t in 0..3 {
            let column_has_zero = (0..3).any(|w| {
                reduced.cost(WorkerIndex::new(w), magyar_model::index::TaskIndex::new(t)) == 0
            });
            assert!(column_has_zero);
        }
    }

    #[test]
    fn test_reduce_is_idempotent_on_reduced_matrix() {
        let m = CostMatrix::from_rows(&[vec![3u64, 4, 6], vec![2, 2, 5], vec![9, 1, 7]]);
        let once = reduce(&m);
        let twice = reduce(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_reduce_by_cover_applies_hungarian_step() {
        // Cover row 0 and column 0; uncovered submatrix is the lower-right
        // block with minimum 2.
        let m = CostMatrix::from_rows(&[vec![0i64, 1, 5], vec![3, 2, 4], vec![0, 6, 3]]);
        let cover = VertexCover::new(
            FxHashSet::from_iter([0usize]),
            FxHashSet::from_iter([0usize]),
        );

        let next = reduce_by_cover(&m, &cover);

        // Covered row keeps its values except the doubly covered corner.
        assert_eq!(next.costs(), &[2, 1, 5, 3, 0, 2, 0, 4, 1]);
    }

    #[test]
    fn test_reduce_by_cover_without_uncovered_cells_is_identity() {
        let m = CostMatrix::from_rows(&[vec![1i64, 2], vec![3, 4]]);
        let cover = VertexCover::new(FxHashSet::from_iter([0usize, 1]), FxHashSet::default());

        assert_eq!(reduce_by_cover(&m, &cover), m);
    }
}
