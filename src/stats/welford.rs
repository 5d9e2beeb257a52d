//! Welford's streaming mean and variance.
//!
//! Each new sample updates the running mean and the sum of squared
//! deviations `M2` in one step:
//!
//! ```text
//! δ  = x − μ
//! μ += δ / n
//! M2 += δ · (x − μ)
//! ```
//!
//! The update never subtracts two large, nearly equal sums, so it stays
//! accurate for data with a large offset where the textbook
//! `Σx² − (Σx)²/n` formula cancels catastrophically.

use num_traits::Float;

use crate::config::Normalization;

/// Observation count as `T`.
pub(crate) fn count_as<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::infinity)
}

/// Running mean and sum of squared deviations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Welford<T> {
    count: usize,
    mean: T,
    m2: T,
}

impl<T: Float> Default for Welford<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Welford<T> {
    pub fn new() -> Self {
        Welford {
            count: 0,
            mean: T::zero(),
            m2: T::zero(),
        }
    }

    pub fn push(&mut self, x: T) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean = self.mean + delta / count_as(self.count);
        self.m2 = self.m2 + delta * (x - self.mean);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Running mean, `None` before the first sample.
    pub fn mean(&self) -> Option<T> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sum of squared deviations from the running mean.
    pub fn m2(&self) -> T {
        self.m2
    }

    /// `M2 / n` or `M2 / (n − 1)`; `None` before the first sample.
    ///
    /// A single sample with [`Normalization::Sample`] gives `0 / 0 = NaN`.
    pub fn variance(&self, norm: Normalization) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        Some(self.m2 / count_as(self.count - norm.ddof()))
    }

    pub fn std_dev(&self, norm: Normalization) -> Option<T> {
        self.variance(norm).map(T::sqrt)
    }
}

impl<T: Float> Extend<T> for Welford<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

impl<'a, T: Float + 'a> Extend<&'a T> for Welford<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Float> FromIterator<T> for Welford<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut acc = Welford::new();
        acc.extend(iter);
        acc
    }
}

impl<'a, T: Float + 'a> FromIterator<&'a T> for Welford<T> {
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}
