//! Dense matrix product `C = A · B`.
//!
//! Each output row is accumulated in i-k-j order: row `i` of `C` starts at
//! zero and receives `A[i][k] · B[k][:]` for ascending `k`. Every entry
//! therefore sums its products in the same order as the textbook triple
//! loop, while the inner loop streams over contiguous rows of `B`.
//!
//! With the `rayon` feature, rows are distributed over the thread pool once
//! the multiply-add count reaches `LinalgOptions::parallel_threshold`. Rows
//! are independent, so the parallel result is bit-identical to the serial one.

use num_traits::Float;

use crate::config::LinalgOptions;
use crate::error::{KError, KResult};
use crate::matrix::{DenseMat, MatView};
use crate::parallel;

/// `A · B` with default options.
pub fn matmul<T>(a: MatView<'_, T>, b: MatView<'_, T>) -> KResult<DenseMat<T>>
where
    T: Float + Send + Sync,
{
    matmul_with(a, b, &LinalgOptions::default())
}

pub fn matmul_with<T>(a: MatView<'_, T>, b: MatView<'_, T>, opts: &LinalgOptions) -> KResult<DenseMat<T>>
where
    T: Float + Send + Sync,
{
    if a.cols() != b.rows() {
        return Err(KError::ShapeMismatch(format!(
            "cannot multiply {}x{} by {}x{}: inner dimensions differ",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        )));
    }
    let (m, n) = (a.rows(), b.cols());
    let mut out = vec![T::zero(); m * n];
    if n == 0 {
        return Ok(DenseMat::from_parts(m, n, out));
    }

    let work = m * a.cols() * n;
    if parallel::should_parallelize(work, opts) {
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            log::debug!("matmul: {m}x{}x{n} on {} threads", a.cols(), rayon::current_num_threads());
            out.par_chunks_mut(n)
                .enumerate()
                .for_each(|(i, row)| accumulate_row(a, b, i, row));
            return Ok(DenseMat::from_parts(m, n, out));
        }
    }

    for (i, row) in out.chunks_mut(n).enumerate() {
        accumulate_row(a, b, i, row);
    }
    Ok(DenseMat::from_parts(m, n, out))
}

#[inline]
fn accumulate_row<T: Float>(a: MatView<'_, T>, b: MatView<'_, T>, i: usize, out: &mut [T]) {
    for (k, &aik) in a.row(i).iter().enumerate() {
        for (o, &bkj) in out.iter_mut().zip(b.row(k)) {
            *o = *o + aik * bkj;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        let c = matmul(MatView::new(&a, 2, 2).unwrap(), MatView::new(&b, 2, 2).unwrap()).unwrap();
        assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn rectangular_shapes() {
        // (2x3)(3x1)
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [1.0, 0.0, -1.0];
        let c = matmul(MatView::new(&a, 2, 3).unwrap(), MatView::new(&b, 3, 1).unwrap()).unwrap();
        assert_eq!((c.rows(), c.cols()), (2, 1));
        assert_eq!(c.as_slice(), &[-2.0, -2.0]);
    }

    #[test]
    fn inner_dimension_mismatch() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [1.0, 2.0, 3.0];
        let r = matmul(MatView::new(&a, 2, 2).unwrap(), MatView::new(&b, 3, 1).unwrap());
        assert!(matches!(r, Err(KError::ShapeMismatch(_))));
    }

    #[test]
    fn parallel_path_is_bit_identical() {
        let n = 12;
        let a: Vec<f64> = (0..n * n).map(|i| (i as f64 * 0.37).sin()).collect();
        let b: Vec<f64> = (0..n * n).map(|i| (i as f64 * 0.11).cos()).collect();
        let av = MatView::new(&a, n, n).unwrap();
        let bv = MatView::new(&b, n, n).unwrap();
        let serial = matmul_with(av, bv, &LinalgOptions::default().with_parallel_threshold(usize::MAX)).unwrap();
        let par = matmul_with(av, bv, &LinalgOptions::default().with_parallel_threshold(1)).unwrap();
        assert_eq!(serial, par);
    }
}
