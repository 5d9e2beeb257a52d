//! LU decomposition with partial (row) pivoting, Doolittle form.
//!
//! The factorization is computed on a private copy of the input and packed
//! into a single row-major buffer: `U` occupies the diagonal and everything
//! above it, the strictly-lower part holds the multipliers of `L`, whose unit
//! diagonal is implicit. Together with the row permutation `P` this gives
//! `P·A = L·U`.
//!
//! Rectangular inputs are accepted; elimination runs over the leading
//! `min(rows, cols)` columns. Determinant and solves require a square factor.
//!
//! An exactly zero pivot is not an error here. Its column receives zero
//! multipliers and the zero stays on the diagonal of `U`, so it surfaces as a
//! zero determinant downstream.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §3.4

use bitflags::bitflags;
use num_traits::Float;

use crate::core::traits::MatShape;
use crate::error::{KError, KResult};
use crate::matrix::{DenseMat, MatView};

bitflags! {
    /// Diagnostics recorded while factoring.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct FactorFlags: u32 {
        /// At least one row interchange was performed.
        const PIVOTED    = 0b01;
        /// Some pivot column was entirely zero at or below the diagonal.
        const ZERO_PIVOT = 0b10;
    }
}

/// Packed result of [`lu`].
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactor<T> {
    rows: usize,
    cols: usize,
    sign: T,
    pivot: Vec<usize>,
    lu: Vec<T>,
    flags: FactorFlags,
}

fn swap_rows<T>(buf: &mut [T], cols: usize, a: usize, b: usize) {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = buf.split_at_mut(hi * cols);
    head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
}

/// Factor `a` as `P·A = L·U`. Never mutates `a`.
pub fn lu<T: Float>(a: MatView<'_, T>) -> LuFactor<T> {
    let (rows, cols) = (a.rows(), a.cols());
    let mut lu = a.as_slice().to_vec();
    let mut pivot: Vec<usize> = (0..rows).collect();
    let mut sign = T::one();
    let mut flags = FactorFlags::empty();

    for k in 0..rows.min(cols) {
        // Largest magnitude wins; the first row scanned keeps ties.
        let mut p = k;
        for i in (k + 1)..rows {
            if lu[i * cols + k].abs() > lu[p * cols + k].abs() {
                p = i;
            }
        }

        if p != k {
            swap_rows(&mut lu, cols, k, p);
            pivot.swap(k, p);
            sign = -sign;
            flags |= FactorFlags::PIVOTED;
        }

        let (head, tail) = lu.split_at_mut((k + 1) * cols);
        let pivot_row = &head[k * cols..];
        let pkk = pivot_row[k];

        if pkk == T::zero() {
            log::debug!("lu: zero pivot in column {k}, multipliers set to zero");
            flags |= FactorFlags::ZERO_PIVOT;
            for row in tail.chunks_exact_mut(cols) {
                row[k] = T::zero();
            }
            continue;
        }

        for row in tail.chunks_exact_mut(cols) {
            let m = row[k] / pkk;
            row[k] = m;
            for c in (k + 1)..cols {
                row[c] = row[c] - m * pivot_row[c];
            }
        }
    }

    LuFactor { rows, cols, sign, pivot, lu, flags }
}

impl<T: Float> LuFactor<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `+1` for an even number of row interchanges, `-1` for odd.
    pub fn sign(&self) -> T {
        self.sign
    }

    /// `pivot[i]` is the row of the input that ended up in row `i`.
    pub fn pivot(&self) -> &[usize] {
        &self.pivot
    }

    /// Packed `L`/`U` buffer, row-major `rows x cols`.
    pub fn packed(&self) -> &[T] {
        &self.lu
    }

    pub fn packed_view(&self) -> MatView<'_, T> {
        MatView::from_parts(&self.lu, self.rows, self.cols)
    }

    pub fn flags(&self) -> FactorFlags {
        self.flags
    }

    /// Diagonal of `U`.
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.rows.min(self.cols)).map(|i| self.lu[i * self.cols + i]).collect()
    }

    /// `sign × Π diag(U)`, folded left to right from `sign`.
    pub fn determinant(&self) -> KResult<T> {
        self.require_square("determinant")?;
        Ok(self.diagonal().into_iter().fold(self.sign, |acc, d| acc * d))
    }

    /// Unit lower-triangular factor, `rows x min(rows, cols)`.
    pub fn lower(&self) -> DenseMat<T> {
        let k = self.rows.min(self.cols);
        let mut l = DenseMat::zeros(self.rows, k);
        for i in 0..self.rows {
            for j in 0..k.min(i + 1) {
                l[(i, j)] = if i == j { T::one() } else { self.lu[i * self.cols + j] };
            }
        }
        l
    }

    /// Upper-triangular factor, `min(rows, cols) x cols`.
    pub fn upper(&self) -> DenseMat<T> {
        let k = self.rows.min(self.cols);
        let mut u = DenseMat::zeros(k, self.cols);
        for i in 0..k {
            for j in i..self.cols {
                u[(i, j)] = self.lu[i * self.cols + j];
            }
        }
        u
    }

    /// Reorder the rows of `a` by the pivot sequence, giving `P·A`.
    pub fn permute(&self, a: MatView<'_, T>) -> KResult<DenseMat<T>> {
        if a.rows() != self.rows {
            return Err(KError::ShapeMismatch(format!(
                "cannot permute a matrix with {} rows by a {}-row pivot",
                a.rows(),
                self.rows
            )));
        }
        let mut out = Vec::with_capacity(a.as_slice().len());
        for &src in &self.pivot {
            out.extend_from_slice(a.row(src));
        }
        DenseMat::from_vec(a.rows(), a.cols(), out)
    }

    /// Solve `A x = b` in place, where `A` is the factored (square) matrix.
    pub fn solve_in_place(&self, b: &mut [T]) -> KResult<()> {
        let n = self.require_square("solve")?;
        if b.len() != n {
            return Err(KError::ShapeMismatch(format!(
                "right-hand side has length {}, expected {n}",
                b.len()
            )));
        }
        if let Some(i) = (0..n).find(|&i| self.lu[i * n + i] == T::zero()) {
            return Err(KError::ZeroPivot(i));
        }
        let permuted: Vec<T> = self.pivot.iter().map(|&src| b[src]).collect();
        b.copy_from_slice(&permuted);
        self.substitute(b);
        Ok(())
    }

    /// Forward substitution with unit-diagonal `L`, then back substitution
    /// with `U`. `x` must already be permuted; `U` must have a nonzero diagonal.
    pub(crate) fn substitute(&self, x: &mut [T]) {
        let n = self.rows;
        let lu = &self.lu;
        for i in 1..n {
            let mut sum = x[i];
            for j in 0..i {
                sum = sum - lu[i * n + j] * x[j];
            }
            x[i] = sum;
        }
        for i in (0..n).rev() {
            let mut sum = x[i];
            for j in (i + 1)..n {
                sum = sum - lu[i * n + j] * x[j];
            }
            x[i] = sum / lu[i * n + i];
        }
    }
}

impl<T> MatShape for LuFactor<T> {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn factor(rows: usize, cols: usize, data: &[f64]) -> LuFactor<f64> {
        lu(MatView::new(data, rows, cols).unwrap())
    }

    #[test]
    fn two_by_two_with_swap() {
        // [[3,2],[5,2]] -> LU [[5,2],[0.6,0.8]], P [1,0], S -1
        let f = factor(2, 2, &[3.0, 2.0, 5.0, 2.0]);
        assert_eq!(f.pivot(), &[1, 0]);
        assert_eq!(f.sign(), -1.0);
        let expected = [5.0, 2.0, 0.6, 0.8];
        for (got, want) in f.packed().iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
        }
        assert!(f.flags().contains(FactorFlags::PIVOTED));
        assert!(!f.flags().contains(FactorFlags::ZERO_PIVOT));
    }

    #[test]
    fn three_by_three_pivot_sequence() {
        // [[1,1,-1],[1,-2,3],[2,3,1]] -> P [2,1,0], S -1
        let f = factor(3, 3, &[1.0, 1.0, -1.0, 1.0, -2.0, 3.0, 2.0, 3.0, 1.0]);
        assert_eq!(f.pivot(), &[2, 1, 0]);
        assert_eq!(f.sign(), -1.0);
        let d = f.diagonal();
        assert_abs_diff_eq!(d[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d[1], -3.5, epsilon = 1e-12);
        assert_abs_diff_eq!(d[2], -1.8571428571428572, epsilon = 1e-12);
    }

    #[test]
    fn ties_keep_first_row() {
        // |a[0][0]| == |a[1][0]|: no swap
        let f = factor(2, 2, &[-2.0, 1.0, 2.0, 3.0]);
        assert_eq!(f.pivot(), &[0, 1]);
        assert_eq!(f.sign(), 1.0);
        assert!(f.flags().is_empty());
    }

    #[test]
    fn zero_column_gives_zero_multipliers() {
        // first column entirely zero
        let f = factor(3, 3, &[0.0, 1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 5.0, 7.0]);
        assert!(f.flags().contains(FactorFlags::ZERO_PIVOT));
        assert!(f.packed().iter().all(|x| x.is_finite()));
        assert_eq!(f.determinant().unwrap(), 0.0);
    }

    #[test]
    fn input_is_not_mutated() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        let before = data.clone();
        let _ = factor(2, 2, &data);
        assert_eq!(data, before);
    }

    #[test]
    fn rectangular_wide_and_tall() {
        // 2x3 [[5,6,5],[7,8,-1]] -> P [1,0]
        let f = factor(2, 3, &[5.0, 6.0, 5.0, 7.0, 8.0, -1.0]);
        assert_eq!(f.pivot(), &[1, 0]);
        assert_eq!((f.lower().rows(), f.lower().cols()), (2, 2));
        assert_eq!((f.upper().rows(), f.upper().cols()), (2, 3));
        assert!(matches!(f.determinant(), Err(KError::ShapeMismatch(_))));

        // 3x2 [[1,2],[3,4],[5,6]] -> P [2,0,1]
        let g = factor(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(g.pivot(), &[2, 0, 1]);
        assert_eq!((g.lower().rows(), g.lower().cols()), (3, 2));
        assert_eq!((g.upper().rows(), g.upper().cols()), (2, 2));
    }

    #[test]
    fn solve_in_place_matches_known_solution() {
        // [[2,1,1],[1,3,2],[1,0,0]] x = [4,5,6] -> x = [6,15,-23]
        let f = factor(3, 3, &[2.0, 1.0, 1.0, 1.0, 3.0, 2.0, 1.0, 0.0, 0.0]);
        let mut x = vec![4.0, 5.0, 6.0];
        f.solve_in_place(&mut x).unwrap();
        for (xi, ei) in x.iter().zip([6.0, 15.0, -23.0].iter()) {
            assert_abs_diff_eq!(*xi, *ei, epsilon = 1e-10);
        }
    }

    #[test]
    fn solve_reports_zero_pivot_and_bad_length() {
        let f = factor(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let mut b = vec![1.0, 1.0];
        assert_eq!(f.solve_in_place(&mut b), Err(KError::ZeroPivot(1)));
        let g = factor(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let mut short = vec![1.0];
        assert!(matches!(g.solve_in_place(&mut short), Err(KError::ShapeMismatch(_))));
    }
}
