//! Core traits, shape-tagged operands and faer interop.

pub mod operand;
pub mod traits;
pub mod wrappers;

pub use operand::{Operand, Value};
pub use traits::MatShape;
