//! Statistics over shape-tagged operands.
//!
//! A sequence reduces to a scalar. A grid reduces per row
//! ([`Dim::Rows`](crate::config::Dim::Rows), the default) or per column
//! ([`Dim::Columns`](crate::config::Dim::Columns)), following
//! [`Operand::reduce_along`]. A lone scalar is its own mean, while its
//! variance, standard deviation and z-score are `NaN`.

use num_traits::Float;

use crate::config::StatsOptions;
use crate::core::operand::{Operand, Value};
use crate::error::KResult;
use crate::stats::moments;

pub fn mean_of<T: Float>(x: Operand<'_, T>, opts: &StatsOptions) -> KResult<Value<T>> {
    x.reduce_along(opts.dim, moments::mean)
}

pub fn variance_of<T: Float>(x: Operand<'_, T>, opts: &StatsOptions) -> KResult<Value<T>> {
    if let Operand::Scalar(_) = x {
        return Ok(Value::Scalar(T::nan()));
    }
    x.reduce_along(opts.dim, |lane| moments::variance(lane, opts.norm))
}

pub fn std_of<T: Float>(x: Operand<'_, T>, opts: &StatsOptions) -> KResult<Value<T>> {
    if let Operand::Scalar(_) = x {
        return Ok(Value::Scalar(T::nan()));
    }
    x.reduce_along(opts.dim, |lane| moments::std_dev(lane, opts.norm))
}

pub fn zscore_of<T: Float>(x: Operand<'_, T>, opts: &StatsOptions) -> KResult<Value<T>> {
    if let Operand::Scalar(_) = x {
        return Ok(Value::Scalar(T::nan()));
    }
    x.transform_along(opts.dim, |lane| moments::zscore(lane, opts.norm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Dim, Normalization};
    use crate::error::KError;
    use crate::matrix::MatView;
    use approx::assert_abs_diff_eq;

    // 3 x 2
    const GRID: [f64; 6] = [1.0, 10.0, 2.0, 20.0, 3.0, 60.0];

    #[test]
    fn scalar_operand() {
        let opts = StatsOptions::default();
        assert_eq!(mean_of(Operand::Scalar(4.0), &opts).unwrap(), Value::Scalar(4.0));
        assert!(variance_of(Operand::Scalar(4.0), &opts).unwrap().as_scalar().unwrap().is_nan());
        assert!(std_of(Operand::Scalar(4.0), &opts).unwrap().as_scalar().unwrap().is_nan());
    }

    #[test]
    fn sequence_reduces_to_scalar() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let opts = StatsOptions::default().with_norm(Normalization::Population);
        let v = variance_of(Operand::Sequence(&xs), &opts).unwrap();
        assert_abs_diff_eq!(v.as_scalar().unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn grid_by_columns_and_rows() {
        let g = Operand::Grid(MatView::new(&GRID, 3, 2).unwrap());
        let cols = mean_of(g, &StatsOptions::default().with_dim(Dim::Columns)).unwrap();
        assert_eq!(cols.to_vec(), vec![2.0, 30.0]);
        let rows = mean_of(g, &StatsOptions::default()).unwrap();
        assert_eq!(rows.to_vec(), vec![5.5, 11.0, 31.5]);
        match rows {
            Value::Grid(m) => assert_eq!((m.rows(), m.cols()), (3, 1)),
            other => panic!("expected a grid, got {other:?}"),
        }
    }

    #[test]
    fn flag_zero_reduces_each_row() {
        // mean([[5,6,5],[7,8,-1]]) is [16/3, 14/3]; with flag 1 it is [6, 7, 2]
        let data = [5.0, 6.0, 5.0, 7.0, 8.0, -1.0];
        let g = Operand::Grid(MatView::new(&data, 2, 3).unwrap());
        let by_row = StatsOptions::default().with_dim(Dim::from_flag(0).unwrap());
        let m = mean_of(g, &by_row).unwrap().to_vec();
        assert_abs_diff_eq!(m[0], 16.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m[1], 14.0 / 3.0, epsilon = 1e-12);
        let by_col = StatsOptions::default().with_dim(Dim::from_flag(1).unwrap());
        assert_eq!(mean_of(g, &by_col).unwrap().to_vec(), vec![6.0, 7.0, 2.0]);

        // std([[1,2],[3,4]]) with the defaults is sqrt(1/2) for each row
        let sq = [1.0, 2.0, 3.0, 4.0];
        let s = std_of(Operand::Grid(MatView::new(&sq, 2, 2).unwrap()), &StatsOptions::default()).unwrap();
        for v in s.to_vec() {
            assert_abs_diff_eq!(v, 0.7071067811865476, epsilon = 1e-15);
        }
    }

    #[test]
    fn zscore_per_column() {
        let g = Operand::Grid(MatView::new(&GRID, 3, 2).unwrap());
        let z = zscore_of(g, &StatsOptions::default().with_dim(Dim::Columns)).unwrap().to_vec();
        // first column: mean 2, sample std 1
        assert_abs_diff_eq!(z[0], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z[2], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z[4], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_lane_is_an_error() {
        let g = Operand::Grid(MatView::<f64>::new(&[], 0, 2).unwrap());
        let opts = StatsOptions::default().with_dim(Dim::Columns);
        assert_eq!(mean_of(g, &opts), Err(KError::EmptyInput("mean")));
    }
}
