//! Tensor norm operations.

use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Compute the Frobenius norm (L2 norm) of a tensor.
///
/// For a tensor T, returns sqrt(sum(|T_i|^2)) where the sum is over all elements.
///
/// # Example
///
/// ```
/// use tensordot::Tensor;
/// use tensordot::operations::norm;
///
/// let t: Tensor<f64> = Tensor::from_vec(vec![3.0, 4.0], &[2]).unwrap();
/// assert!((norm(&t) - 5.0).abs() < 1e-10);
/// ```
pub fn norm<ElT: Scalar>(tensor: &DenseTensor<ElT>) -> f64 {
    norm_sqr(tensor).sqrt()
}

/// Compute the squared Frobenius norm of a tensor.
///
/// More efficient than `norm` when the square root is not needed.
pub fn norm_sqr<ElT: Scalar>(tensor: &DenseTensor<ElT>) -> f64 {
    tensor.data().iter().map(|&x| x.squared_magnitude()).sum()
}
