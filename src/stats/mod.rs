//! Descriptive statistics built on Welford's accumulator: mean, variance,
//! standard deviation, z-scores, covariance and correlation.

pub mod along;
pub mod cov;
pub mod moments;
pub mod welford;

pub use along::{mean_of, std_of, variance_of, zscore_of};
pub use cov::{corrcoef, corrcoef_pair, cov_pair, covariance, covariance_with};
pub use moments::{mean, std_dev, variance, zscore};
pub use welford::Welford;
