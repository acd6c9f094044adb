//! Outer product operation for tensors.

use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Compute the outer product of two tensors.
///
/// For A with shape [a0, a1, ...] and B with shape [b0, b1, ...],
/// returns C with shape [a0, a1, ..., b0, b1, ...] where
/// C[i0, i1, ..., j0, j1, ...] = A[i0, i1, ...] * B[j0, j1, ...].
/// This is the same as contracting over zero axes.
///
/// # Example
///
/// ```
/// use tensordot::Tensor;
/// use tensordot::operations::outer;
///
/// let a: Tensor<f64> = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
/// let b: Tensor<f64> = Tensor::from_vec(vec![3.0, 4.0, 5.0], &[3]).unwrap();
/// let c = outer(&a, &b);
///
/// assert_eq!(c.shape(), &[2, 3]);
/// assert_eq!(c.data(), &[3.0, 4.0, 5.0, 6.0, 8.0, 10.0]);
/// ```
pub fn outer<ElT: Scalar>(a: &DenseTensor<ElT>, b: &DenseTensor<ElT>) -> DenseTensor<ElT> {
    let mut result = DenseTensor::zeros(&outer_shape(a, b));
    fill_outer(&mut result, a, b);
    result
}

/// Outer product into a pre-allocated result tensor.
///
/// # Errors
///
/// Returns `TensorError::OutputShapeMismatch` unless `result` has shape
/// `[a_shape..., b_shape...]`.
///
/// # Example
///
/// ```
/// use tensordot::Tensor;
/// use tensordot::operations::outer_into;
///
/// let a: Tensor<f64> = Tensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
/// let b: Tensor<f64> = Tensor::from_vec(vec![3.0, 4.0, 5.0], &[3]).unwrap();
/// let mut c = Tensor::<f64>::zeros(&[2, 3]);
///
/// outer_into(&mut c, &a, &b).unwrap();
/// assert_eq!(c.get(&[1, 0]), Some(&6.0));
/// ```
pub fn outer_into<ElT: Scalar>(
    result: &mut DenseTensor<ElT>,
    a: &DenseTensor<ElT>,
    b: &DenseTensor<ElT>,
) -> Result<(), TensorError> {
    let expected = outer_shape(a, b);
    if result.shape() != expected.as_slice() {
        return Err(TensorError::OutputShapeMismatch {
            expected,
            actual: result.shape().to_vec(),
        });
    }
    fill_outer(result, a, b);
    Ok(())
}

fn outer_shape<ElT: Scalar>(a: &DenseTensor<ElT>, b: &DenseTensor<ElT>) -> Vec<usize> {
    a.shape().iter().chain(b.shape()).copied().collect()
}

fn fill_outer<ElT: Scalar>(
    result: &mut DenseTensor<ElT>,
    a: &DenseTensor<ElT>,
    b: &DenseTensor<ElT>,
) {
    let b_data = b.data();
    let b_len = b_data.len();
    let out = result.data_mut();

    // Row-major: linear index = i * b_len + j
    for (i, &a_i) in a.data().iter().enumerate() {
        for (j, &b_j) in b_data.iter().enumerate() {
            out[i * b_len + j] = a_i * b_j;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::c64;

    #[test]
    fn test_outer_2d_1d() {
        let a: DenseTensor<f64> = DenseTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let b: DenseTensor<f64> = DenseTensor::from_vec(vec![10.0, 20.0], &[2]).unwrap();
        let c = outer(&a, &b);

        assert_eq!(c.shape(), &[2, 2, 2]);

        // a is row-major: a[0,0]=1, a[0,1]=2, a[1,0]=3, a[1,1]=4
        assert_eq!(*c.get(&[0, 0, 0]).unwrap(), 10.0);
        assert_eq!(*c.get(&[0, 1, 0]).unwrap(), 20.0);
        assert_eq!(*c.get(&[1, 0, 0]).unwrap(), 30.0);
        assert_eq!(*c.get(&[1, 1, 1]).unwrap(), 80.0);
    }

    #[test]
    fn test_outer_scalar() {
        let a: DenseTensor<f64> = DenseTensor::scalar(2.0);
        let b: DenseTensor<f64> = DenseTensor::from_vec(vec![3.0, 4.0, 5.0], &[3]).unwrap();
        let c = outer(&a, &b);

        assert_eq!(c.shape(), &[3]);
        assert_eq!(c.data(), &[6.0, 8.0, 10.0]);

        let both = outer(&a, &a);
        assert_eq!(both.ndim(), 0);
        assert_eq!(both.data(), &[4.0]);
    }

    #[test]
    fn test_outer_empty() {
        let a: DenseTensor<f64> = DenseTensor::zeros(&[0]);
        let b: DenseTensor<f64> = DenseTensor::ones(&[3]);
        let c = outer(&a, &b);
        assert_eq!(c.shape(), &[0, 3]);
        assert!(c.is_empty());
    }

    #[test]
    fn test_outer_complex() {
        let a: DenseTensor<c64> =
            DenseTensor::from_vec(vec![c64::new(1.0, 1.0), c64::new(2.0, 0.0)], &[2]).unwrap();
        let b: DenseTensor<c64> =
            DenseTensor::from_vec(vec![c64::new(1.0, 0.0), c64::new(0.0, 1.0)], &[2]).unwrap();
        let c = outer(&a, &b);

        // c[0,1] = (1+i) * i = -1+i
        let c01 = c.get(&[0, 1]).unwrap();
        assert_eq!(c01.re, -1.0);
        assert_eq!(c01.im, 1.0);
    }

    #[test]
    fn test_outer_into_wrong_shape() {
        let a: DenseTensor<f64> = DenseTensor::ones(&[2]);
        let b: DenseTensor<f64> = DenseTensor::ones(&[3]);
        let mut c = DenseTensor::<f64>::zeros(&[3, 2]);

        assert_eq!(
            outer_into(&mut c, &a, &b).unwrap_err(),
            TensorError::OutputShapeMismatch {
                expected: vec![2, 3],
                actual: vec![3, 2]
            }
        );
    }
}
