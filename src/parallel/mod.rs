//! Shared-memory parallelism.
//!
//! With the `rayon` feature the kernel splits independent output rows of
//! matrix products and covariance across rayon's global pool. Without it,
//! every routine runs serially and [`should_parallelize`] is always false.

use crate::config::LinalgOptions;

/// True when `work` multiply-adds justify going parallel.
pub fn should_parallelize(work: usize, opts: &LinalgOptions) -> bool {
    cfg!(feature = "rayon") && work >= opts.parallel_threshold
}

#[cfg(feature = "rayon")]
pub mod rayon_pool;
#[cfg(feature = "rayon")]
pub use rayon_pool::{init_thread_pool, num_threads};
