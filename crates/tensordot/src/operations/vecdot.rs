//! Dot product of flattened tensors.

use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Sum of elementwise products of the two flattened (row-major) element
/// sequences, without conjugation.
///
/// Shapes may differ; only the element counts must agree. For equal shapes
/// this equals contracting over every axis pairwise.
///
/// # Errors
///
/// Returns `TensorError::DataLengthMismatch` if the element counts differ.
///
/// # Example
///
/// ```
/// use tensordot::Tensor;
/// use tensordot::operations::vecdot;
///
/// let a: Tensor<f64> = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
/// let b: Tensor<f64> = Tensor::from_vec(vec![1.0, 1.0, 2.0, 2.0], &[4]).unwrap();
/// assert_eq!(vecdot(&a, &b).unwrap(), 17.0);
/// ```
pub fn vecdot<ElT: Scalar>(a: &DenseTensor<ElT>, b: &DenseTensor<ElT>) -> Result<ElT, TensorError> {
    if a.len() != b.len() {
        return Err(TensorError::DataLengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.data()
        .iter()
        .zip(b.data())
        .fold(ElT::zero(), |acc, (&x, &y)| acc + x * y))
}
