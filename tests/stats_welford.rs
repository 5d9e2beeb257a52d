//! Tests for the statistics routines: Welford moments, z-scores,
//! covariance, correlation and dimension-wise reductions.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use numkern::config::{Dim, Normalization, StatsOptions};
use numkern::core::{Operand, Value};
use numkern::flat;
use numkern::matrix::{DenseMat, MatView};
use numkern::stats::{corrcoef, covariance, mean_of, variance, variance_of, zscore, Welford};
use numkern::KError;
use rand::Rng;

fn two_pass_variance(xs: &[f64], ddof: usize) -> f64 {
    let n = xs.len() as f64;
    let mu = xs.iter().sum::<f64>() / n;
    xs.iter().map(|x| (x - mu) * (x - mu)).sum::<f64>() / (n - ddof as f64)
}

fn random_grid(rows: usize, cols: usize) -> DenseMat<f64> {
    let mut rng = rand::thread_rng();
    DenseMat::from_vec(rows, cols, (0..rows * cols).map(|_| rng.gen_range(-10.0..10.0)).collect()).unwrap()
}

#[test]
fn worked_variance() {
    let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(flat::variance(&xs, 0).unwrap(), 2.0);
    assert_eq!(flat::variance(&xs, 1).unwrap(), 2.5);
    assert_abs_diff_eq!(flat::std_dev(&xs, 1).unwrap(), 2.5f64.sqrt(), epsilon = 1e-15);
    assert_eq!(flat::mean(&xs).unwrap(), 3.0);
}

#[test]
fn welford_matches_two_pass_on_wide_range() {
    let mut rng = rand::thread_rng();
    let xs: Vec<f64> = (0..1000).map(|_| rng.gen_range(-1e6..1e6)).collect();
    for norm in [Normalization::Population, Normalization::Sample] {
        let ours = variance(&xs, norm).unwrap();
        assert_relative_eq!(ours, two_pass_variance(&xs, norm.ddof()), max_relative = 1e-6);
    }
    let acc: Welford<f64> = xs.iter().collect();
    assert_eq!(acc.count(), 1000);
}

#[test]
fn covariance_diagonal_is_column_variance() {
    let g = random_grid(25, 4);
    for norm in [Normalization::Population, Normalization::Sample] {
        let c = covariance(g.view(), norm).unwrap();
        assert_eq!((c.rows(), c.cols()), (4, 4));
        for j in 0..4 {
            let col = g.view().column(j);
            assert_abs_diff_eq!(c[(j, j)], variance(&col, norm).unwrap(), epsilon = 1e-9);
        }
    }
    let flat_c = flat::covariance(g.as_slice(), 25, 4, 1).unwrap();
    assert_eq!(flat_c, covariance(g.view(), Normalization::Sample).unwrap().into_vec());
}

#[test]
fn correlation_is_bounded_with_unit_diagonal() {
    let g = random_grid(30, 5);
    let r = corrcoef(g.view()).unwrap();
    for i in 0..5 {
        assert_abs_diff_eq!(r[(i, i)], 1.0, epsilon = 1e-12);
        for j in 0..5 {
            assert!((-1.0..=1.0).contains(&r[(i, j)]));
            assert_eq!(r[(i, j)], r[(j, i)]);
        }
    }
}

#[test]
fn columnwise_statistics_match_per_column() {
    let g = random_grid(12, 3);
    let opts = StatsOptions::default().with_dim(Dim::Columns);
    let by_col = variance_of(Operand::Grid(g.view()), &opts).unwrap().to_vec();
    for (j, v) in by_col.iter().enumerate() {
        assert_eq!(*v, variance(&g.view().column(j), Normalization::Sample).unwrap());
    }

    let by_row = mean_of(Operand::Grid(g.view()), &opts.with_dim(Dim::Rows)).unwrap();
    match by_row {
        Value::Grid(m) => {
            assert_eq!((m.rows(), m.cols()), (12, 1));
            for i in 0..12 {
                let expected = g.row(i).iter().sum::<f64>() / 3.0;
                assert_abs_diff_eq!(m[(i, 0)], expected, epsilon = 1e-12);
            }
        }
        other => panic!("expected grid, got {other:?}"),
    }
}

#[test]
fn zscore_edge_cases() {
    assert_eq!(flat::zscore(&[2.0, 2.0, 2.0], 0).unwrap(), vec![0.0; 3]);
    assert!(flat::zscore(&[2.0], 1).unwrap()[0].is_nan());
    let z = zscore(&[1.0, 2.0, 3.0], Normalization::Sample).unwrap();
    assert_abs_diff_eq!(z[0], -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(z[2], 1.0, epsilon = 1e-12);
}

#[test]
fn empty_and_bad_flags() {
    assert_eq!(flat::mean(&[]), Err(KError::EmptyInput("mean")));
    assert_eq!(flat::std_dev(&[1.0], 3), Err(KError::InvalidFlag(3)));
    assert_eq!(Dim::from_flag(2), Err(KError::InvalidDim(2)));
    let empty = MatView::<f64>::new(&[], 0, 2).unwrap();
    assert_eq!(covariance(empty, Normalization::Sample), Err(KError::EmptyInput("covariance")));
}
