//! Shape-tagged operands.
//!
//! Callers decide at the boundary whether they hold a scalar, a flat
//! sequence or a rectangular grid; the kernel dispatches on the tag with an
//! exhaustive `match` and never inspects data to guess a shape.

use crate::config::Dim;
use crate::error::{KError, KResult};
use crate::matrix::{DenseMat, MatView};

/// Borrowed input of any supported shape.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, T> {
    Scalar(T),
    Sequence(&'a [T]),
    Grid(MatView<'a, T>),
}

/// Owned result of any supported shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Scalar(T),
    Sequence(Vec<T>),
    Grid(DenseMat<T>),
}

impl<T: Copy> Value<T> {
    pub fn as_scalar(&self) -> Option<T> {
        match self {
            Value::Scalar(x) => Some(*x),
            _ => None,
        }
    }

    /// Flat contents in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        match self {
            Value::Scalar(x) => vec![*x],
            Value::Sequence(v) => v.clone(),
            Value::Grid(m) => m.as_slice().to_vec(),
        }
    }
}

impl<'a, T: Copy> Operand<'a, T> {
    /// Apply `f` to every element, keeping the shape.
    pub fn map<F: FnMut(T) -> T>(&self, mut f: F) -> Value<T> {
        match self {
            Operand::Scalar(x) => Value::Scalar(f(*x)),
            Operand::Sequence(xs) => Value::Sequence(xs.iter().map(|&x| f(x)).collect()),
            Operand::Grid(m) => {
                let data = m.as_slice().iter().map(|&x| f(x)).collect();
                Value::Grid(DenseMat::from_parts(m.rows(), m.cols(), data))
            }
        }
    }

    /// Reduce each lane to one value.
    ///
    /// A sequence reduces to a scalar. A grid reduces to a `1 x cols` row
    /// along [`Dim::Columns`] or a `rows x 1` column along [`Dim::Rows`].
    /// A scalar is treated as a one-element lane.
    pub fn reduce_along<F>(&self, dim: Dim, mut f: F) -> KResult<Value<T>>
    where
        F: FnMut(&[T]) -> KResult<T>,
    {
        match self {
            Operand::Scalar(x) => Ok(Value::Scalar(f(std::slice::from_ref(x))?)),
            Operand::Sequence(xs) => Ok(Value::Scalar(f(*xs)?)),
            Operand::Grid(m) => {
                let out = match dim {
                    Dim::Columns => {
                        let vals = (0..m.cols()).map(|j| f(&m.column(j))).collect::<KResult<Vec<_>>>()?;
                        DenseMat::from_parts(1, m.cols(), vals)
                    }
                    Dim::Rows => {
                        let vals = (0..m.rows()).map(|i| f(m.row(i))).collect::<KResult<Vec<_>>>()?;
                        DenseMat::from_parts(m.rows(), 1, vals)
                    }
                };
                Ok(Value::Grid(out))
            }
        }
    }

    /// Replace each lane by `f(lane)`, which must return a lane of the same length.
    pub fn transform_along<F>(&self, dim: Dim, mut f: F) -> KResult<Value<T>>
    where
        F: FnMut(&[T]) -> KResult<Vec<T>>,
    {
        let lane_len_err = |got: usize, want: usize| {
            KError::ShapeMismatch(format!("lane transform returned {got} values, expected {want}"))
        };
        match self {
            Operand::Scalar(x) => {
                let out = f(std::slice::from_ref(x))?;
                out.first().copied().map(Value::Scalar).ok_or_else(|| lane_len_err(0, 1))
            }
            Operand::Sequence(xs) => {
                let out = f(*xs)?;
                if out.len() != xs.len() {
                    return Err(lane_len_err(out.len(), xs.len()));
                }
                Ok(Value::Sequence(out))
            }
            Operand::Grid(m) => {
                let mut out = m.to_dense();
                match dim {
                    Dim::Columns => {
                        for j in 0..m.cols() {
                            let lane = f(&m.column(j))?;
                            if lane.len() != m.rows() {
                                return Err(lane_len_err(lane.len(), m.rows()));
                            }
                            for (i, v) in lane.into_iter().enumerate() {
                                out[(i, j)] = v;
                            }
                        }
                    }
                    Dim::Rows => {
                        for i in 0..m.rows() {
                            let lane = f(m.row(i))?;
                            if lane.len() != m.cols() {
                                return Err(lane_len_err(lane.len(), m.cols()));
                            }
                            out.row_mut(i).copy_from_slice(&lane);
                        }
                    }
                }
                Ok(Value::Grid(out))
            }
        }
    }
}
