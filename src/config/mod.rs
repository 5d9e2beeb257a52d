//! Configuration types resolved once at the call boundary.

pub mod options;
pub use options::{Dim, LinalgOptions, Normalization, SingularPolicy, StatsOptions};
