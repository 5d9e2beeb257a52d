//! Row-major dense matrices over flat buffers.
//!
//! [`MatView`] borrows a caller-owned buffer plus its dimensions and is the
//! input type of every kernel routine; it is never mutated. [`DenseMat`] owns
//! its buffer and is what the kernel hands back. Both store element `(i, j)`
//! at `i * cols + j`.

use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::core::traits::MatShape;
use crate::error::{KError, KResult};

fn check_len(len: usize, rows: usize, cols: usize) -> KResult<()> {
    match rows.checked_mul(cols) {
        Some(n) if n == len => Ok(()),
        _ => Err(KError::ShapeMismatch(format!(
            "buffer of length {len} cannot hold a {rows}x{cols} matrix"
        ))),
    }
}

/// Borrowed row-major matrix.
#[derive(Debug, Clone, Copy)]
pub struct MatView<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
}

impl<'a, T: Copy> MatView<'a, T> {
    /// Wrap `data` as a `rows x cols` matrix; fails unless `data.len() == rows * cols`.
    pub fn new(data: &'a [T], rows: usize, cols: usize) -> KResult<Self> {
        check_len(data.len(), rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    /// Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_parts(data: &'a [T], rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Treat a flat sequence as a single column.
    pub fn column_vector(data: &'a [T]) -> Self {
        Self { data, rows: data.len(), cols: 1 }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.cols + j]
    }

    pub fn row(&self, i: usize) -> &'a [T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Copy of column `j`.
    pub fn column(&self, j: usize) -> Vec<T> {
        (0..self.rows).map(|i| self.get(i, j)).collect()
    }

    pub fn to_dense(&self) -> DenseMat<T> {
        DenseMat { data: self.data.to_vec(), rows: self.rows, cols: self.cols }
    }

    pub fn transpose(&self) -> DenseMat<T> {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.get(i, j));
            }
        }
        DenseMat { data, rows: self.cols, cols: self.rows }
    }
}

impl<T> MatShape for MatView<'_, T> {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

/// Owned row-major matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMat<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> DenseMat<T> {
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> KResult<Self> {
        check_len(data.len(), rows, cols)?;
        Ok(Self { data, rows, cols })
    }

    /// Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Build from nested rows; every row must have the same length.
    pub fn from_rows(rows: &[Vec<T>]) -> KResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, r) in rows.iter().enumerate() {
            if r.len() != cols {
                return Err(KError::ShapeMismatch(format!(
                    "row {i} has {} columns, expected {cols}",
                    r.len()
                )));
            }
            data.extend_from_slice(r);
        }
        Ok(Self { data, rows: rows.len(), cols })
    }

    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self { data: vec![value; rows * cols], rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn view(&self) -> MatView<'_, T> {
        MatView { data: &self.data, rows: self.rows, cols: self.cols }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Nested rows, for callers that want `Vec<Vec<T>>` back.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    pub fn transpose(&self) -> Self {
        self.view().transpose()
    }

    /// Swap rows `a` and `b` in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }
}

impl<T: Copy + Zero> DenseMat<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }
}

impl<T: Copy + Zero + One> DenseMat<T> {
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }
}

impl<T> Index<(usize, usize)> for DenseMat<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMat<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i * self.cols + j]
    }
}

impl<T> MatShape for DenseMat<T> {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}
