//! Construction of dense tensors from nested sequences.
//!
//! ```
//! use tensordot::tensor;
//!
//! let m = tensor![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].unwrap();
//! assert_eq!(m.shape(), &[2, 3]);
//! assert_eq!(m.get(&[1, 0]), Some(&4.0));
//! ```

use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// A possibly-ragged nested sequence of scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Scalar(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Shape implied by following the first element at every level.
    fn infer_shape(&self) -> Vec<usize> {
        let mut shape = Vec::new();
        let mut node = self;
        while let Nested::List(items) = node {
            shape.push(items.len());
            match items.first() {
                Some(first) => node = first,
                None => break,
            }
        }
        shape
    }
}

impl<T: Copy> Nested<T> {
    fn flatten_into(
        &self,
        shape: &[usize],
        depth: usize,
        out: &mut Vec<T>,
    ) -> Result<(), TensorError> {
        match (self, shape.get(depth)) {
            (Nested::Scalar(v), None) => {
                out.push(*v);
                Ok(())
            }
            (Nested::List(items), Some(&len)) if items.len() == len => {
                for item in items {
                    item.flatten_into(shape, depth + 1, out)?;
                }
                Ok(())
            }
            _ => Err(TensorError::RaggedData { depth }),
        }
    }
}

impl<ElT: Scalar> DenseTensor<ElT> {
    /// Build a dense tensor from a nested sequence.
    ///
    /// The shape is taken from the nesting depth and list lengths; the
    /// elements are laid out in row-major order. A bare scalar produces a
    /// rank-0 tensor.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::RaggedData` if sibling lists differ in length
    /// or nesting depth.
    pub fn from_nested(nested: &Nested<ElT>) -> Result<Self, TensorError> {
        let shape = nested.infer_shape();
        let mut data = Vec::with_capacity(shape.iter().product());
        nested.flatten_into(&shape, 0, &mut data)?;
        Self::from_vec(data, &shape)
    }
}

/// Build a [`Nested`] value from bracketed literals.
#[macro_export]
macro_rules! nested {
    ([$([$($inner:tt)*]),+ $(,)?]) => {
        $crate::Nested::List(vec![$($crate::nested!([$($inner)*])),+])
    };
    ([$($value:expr),* $(,)?]) => {
        $crate::Nested::List(vec![$($crate::Nested::Scalar($value)),*])
    };
    ($value:expr) => {
        $crate::Nested::Scalar($value)
    };
}

/// Build a dense tensor from bracketed literals.
///
/// Expands to `DenseTensor::from_nested(..)` and therefore yields a
/// `Result`; ragged input is reported as `TensorError::RaggedData`.
/// The outermost brackets are the macro delimiters, so the result has
/// rank at least 1; use [`Tensor::scalar`](crate::Tensor::scalar) for rank 0.
///
/// ```
/// use tensordot::tensor;
///
/// let t = tensor![[[1.0, 2.0], [3.0, 4.0]], [[5.0, 6.0], [7.0, 8.0]]].unwrap();
/// assert_eq!(t.shape(), &[2, 2, 2]);
///
/// let v = tensor![1.0, 2.0, 3.0].unwrap();
/// assert_eq!(v.shape(), &[3]);
///
/// assert!(tensor![[1.0, 2.0], [3.0]].is_err());
/// ```
#[macro_export]
macro_rules! tensor {
    ($($tokens:tt)*) => {
        $crate::DenseTensor::from_nested(&$crate::nested!([$($tokens)*]))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::c64;

    #[test]
    fn test_from_nested_matrix() {
        let t = tensor![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].unwrap();
        assert_eq!(t.shape(), &[2, 3]);
        assert_eq!(t.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_nested_negative_literals() {
        let t = tensor![[-1.0, 2.0], [3.0, -4.0]].unwrap();
        assert_eq!(t.get(&[1, 1]), Some(&-4.0));
    }

    #[test]
    fn test_from_nested_vector() {
        let t = tensor![1.0, 2.0].unwrap();
        assert_eq!(t.shape(), &[2]);
    }

    #[test]
    fn test_from_nested_scalar() {
        let t = DenseTensor::from_nested(&Nested::Scalar(7.0)).unwrap();
        assert_eq!(t.shape(), &[] as &[usize]);
        assert_eq!(t.data(), &[7.0]);
    }

    #[test]
    fn test_from_nested_empty() {
        let t: DenseTensor<f64> = tensor![].unwrap();
        assert_eq!(t.shape(), &[0]);
        assert!(t.is_empty());
    }

    #[test]
    fn test_ragged_length() {
        let result = tensor![[1.0, 2.0], [3.0]];
        assert_eq!(result.unwrap_err(), TensorError::RaggedData { depth: 1 });
    }

    #[test]
    fn test_ragged_depth() {
        let nested = Nested::List(vec![
            Nested::List(vec![Nested::Scalar(1.0), Nested::Scalar(2.0)]),
            Nested::Scalar(3.0),
        ]);
        assert_eq!(
            DenseTensor::from_nested(&nested).unwrap_err(),
            TensorError::RaggedData { depth: 1 }
        );
    }

    #[test]
    fn test_from_nested_complex() {
        let t = tensor![c64::new(1.0, 1.0), c64::new(0.0, -1.0)].unwrap();
        assert_eq!(t.get(&[1]), Some(&c64::new(0.0, -1.0)));
    }
}
