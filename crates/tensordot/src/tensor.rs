//! N-dimensional dense tensor type.
//!
//! Elements live in one contiguous row-major `Vec`; shape and strides are
//! kept alongside so indexing never recomputes them.

use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::strides::{cartesian_to_linear, compute_strides, num_elements};

/// A dense n-dimensional tensor.
///
/// The shape is an ordered list of axis lengths; a rank-0 tensor (empty
/// shape) holds exactly one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<ElT: Scalar> {
    data: Vec<ElT>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

/// Alias used throughout the contraction code.
pub type DenseTensor<ElT> = Tensor<ElT>;

impl<ElT: Scalar> Tensor<ElT> {
    fn from_parts(data: Vec<ElT>, shape: &[usize]) -> Self {
        debug_assert_eq!(data.len(), num_elements(shape));
        Self {
            data,
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        }
    }

    /// Create a new tensor with the given shape, zero-initialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensordot::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::zeros(&[2, 3, 4]);
    /// assert_eq!(t.shape(), &[2, 3, 4]);
    /// assert_eq!(t.len(), 24);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_parts(vec![ElT::zero(); num_elements(shape)], shape)
    }

    /// Create a tensor whose elements are produced by `next`, called once per
    /// element in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensordot::Tensor;
    ///
    /// let mut n = 0.0;
    /// let t: Tensor<f64> = Tensor::from_fn(&[2, 2], || {
    ///     n += 0.5;
    ///     n
    /// });
    /// assert_eq!(t.data(), &[0.5, 1.0, 1.5, 2.0]);
    /// ```
    pub fn from_fn(shape: &[usize], next: impl FnMut() -> ElT) -> Self {
        let data = std::iter::repeat_with(next)
            .take(num_elements(shape))
            .collect();
        Self::from_parts(data, shape)
    }

    /// Create tensor from data and shape.
    ///
    /// Data is expected to be in row-major order (last axis fastest).
    ///
    /// # Errors
    ///
    /// Returns `TensorError::DataLengthMismatch` if data length doesn't match shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensordot::{DenseTensor, Tensor};
    ///
    /// let t: DenseTensor<f64> = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(t.get(&[0, 0]), Some(&1.0));
    /// assert_eq!(t.get(&[0, 1]), Some(&2.0)); // Row-major: [0,1] is second element
    /// assert_eq!(t.get(&[1, 0]), Some(&4.0));
    /// ```
    pub fn from_vec(data: Vec<ElT>, shape: &[usize]) -> Result<Self, TensorError> {
        let expected = num_elements(shape);
        if data.len() != expected {
            return Err(TensorError::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(data, shape))
    }

    /// Create a rank-0 tensor holding a single value.
    pub fn scalar(value: ElT) -> Self {
        Self::from_parts(vec![value], &[])
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the rank (number of dimensions).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Get total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if tensor has zero elements (some axis has length 0).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Get underlying data as slice (row-major).
    #[inline]
    pub fn data(&self) -> &[ElT] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [ElT] {
        &mut self.data
    }

    /// Consume the tensor and return its row-major elements.
    pub fn into_vec(self) -> Vec<ElT> {
        self.data
    }

    #[inline]
    pub fn get_linear(&self, i: usize) -> Option<&ElT> {
        self.data.get(i)
    }

    /// Get element by cartesian indices.
    ///
    /// Returns `None` if indices are out of bounds or wrong number of indices.
    pub fn get(&self, indices: &[usize]) -> Option<&ElT> {
        let linear = self.checked_linear(indices).ok()?;
        self.get_linear(linear)
    }

    /// Get mutable element by cartesian indices.
    pub fn get_mut(&mut self, indices: &[usize]) -> Option<&mut ElT> {
        let linear = self.checked_linear(indices).ok()?;
        self.data.get_mut(linear)
    }

    /// Set element by cartesian indices.
    ///
    /// # Errors
    ///
    /// Returns error if indices are out of bounds or wrong number of indices.
    pub fn set(&mut self, indices: &[usize], value: ElT) -> Result<(), TensorError> {
        let linear = self.checked_linear(indices)?;
        self.data[linear] = value;
        Ok(())
    }

    /// Fill all elements with a value.
    pub fn fill(&mut self, value: ElT) {
        self.data.fill(value);
    }

    /// Create a tensor filled with ones.
    pub fn ones(shape: &[usize]) -> Self {
        let mut t = Self::zeros(shape);
        t.fill(ElT::one());
        t
    }

    fn checked_linear(&self, indices: &[usize]) -> Result<usize, TensorError> {
        if indices.len() != self.ndim() {
            return Err(TensorError::WrongNumberOfIndices {
                expected: self.ndim(),
                actual: indices.len(),
            });
        }
        for (&idx, &dim) in indices.iter().zip(self.shape.iter()) {
            if idx >= dim {
                return Err(TensorError::IndexOutOfBounds {
                    index: idx,
                    dim_size: dim,
                });
            }
        }
        Ok(cartesian_to_linear(indices, &self.strides))
    }

    /// Create a 1-D tensor `[0, 1, ..., n-1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use tensordot::Tensor;
    ///
    /// let t = Tensor::<f64>::arange(24).into_reshape(&[2, 3, 4]).unwrap();
    /// assert_eq!(t.get(&[1, 2, 3]), Some(&23.0));
    /// ```
    pub fn arange(n: usize) -> Self {
        let data = (0..n).map(|i| ElT::from_f64(i as f64)).collect();
        Self::from_parts(data, &[n])
    }

    /// Reshape the tensor to a new shape, copying the data.
    ///
    /// The row-major element order is preserved; the total number of
    /// elements must remain the same.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::DataLengthMismatch` if the element counts differ.
    ///
    /// # Example
    ///
    /// ```
    /// use tensordot::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let t3x2 = t.reshape(&[3, 2]).unwrap();
    /// assert_eq!(t3x2.shape(), &[3, 2]);
    /// assert_eq!(t3x2.get(&[1, 0]), Some(&3.0));
    /// ```
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Self, TensorError> {
        self.clone().into_reshape(new_shape)
    }

    /// Reshape, reusing this tensor's buffer.
    pub fn into_reshape(self, new_shape: &[usize]) -> Result<Self, TensorError> {
        let new_len = num_elements(new_shape);
        if self.len() != new_len {
            return Err(TensorError::DataLengthMismatch {
                expected: self.len(),
                actual: new_len,
            });
        }

        Ok(Self::from_parts(self.data, new_shape))
    }

    /// Permute the dimensions of the tensor.
    ///
    /// `perm[i]` gives the source dimension for the i-th dimension of the result.
    ///
    /// # Errors
    ///
    /// Returns error if `perm` is not a valid permutation of `0..ndim`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensordot::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let t2 = t.permutedims(&[1, 0]).unwrap();
    /// assert_eq!(t2.shape(), &[3, 2]);
    /// assert_eq!(t.get(&[0, 2]), t2.get(&[2, 0]));
    /// ```
    pub fn permutedims(&self, perm: &[usize]) -> Result<Self, TensorError> {
        crate::operations::permutedims(self, perm)
    }

    /// Matrix transpose.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::RankMismatch` unless the tensor has rank 2.
    pub fn transpose(&self) -> Result<Self, TensorError> {
        if self.ndim() != 2 {
            return Err(TensorError::RankMismatch {
                expected: 2,
                actual: self.ndim(),
            });
        }
        self.permutedims(&[1, 0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::c64;

    fn test_zeros_generic<T: Scalar>() {
        let t: Tensor<T> = Tensor::zeros(&[2, 3]);
        assert_eq!(t.shape(), &[2, 3]);
        assert_eq!(t.ndim(), 2);
        assert_eq!(t.len(), 6);
        assert_eq!(t.strides(), &[3, 1]);
        for i in 0..6 {
            assert_eq!(*t.get_linear(i).unwrap(), T::zero());
        }
    }

    #[test]
    fn test_zeros_f64() {
        test_zeros_generic::<f64>();
    }

    #[test]
    fn test_zeros_c64() {
        test_zeros_generic::<c64>();
    }

    #[test]
    fn test_from_vec_row_major() {
        let t: DenseTensor<f64> =
            Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();

        assert_eq!(t.get(&[0, 0]), Some(&1.0));
        assert_eq!(t.get(&[0, 1]), Some(&2.0));
        assert_eq!(t.get(&[0, 2]), Some(&3.0));
        assert_eq!(t.get(&[1, 0]), Some(&4.0));
        assert_eq!(t.get(&[1, 1]), Some(&5.0));
        assert_eq!(t.get(&[1, 2]), Some(&6.0));
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let result = Tensor::<f64>::from_vec(vec![1.0, 2.0, 3.0], &[2, 3]);
        assert_eq!(
            result.unwrap_err(),
            TensorError::DataLengthMismatch {
                expected: 6,
                actual: 3
            }
        );
    }

    #[test]
    fn test_get_out_of_bounds() {
        let t: Tensor<f64> = Tensor::zeros(&[2, 3]);
        assert_eq!(t.get(&[2, 0]), None);
        assert_eq!(t.get(&[0, 3]), None);
        assert_eq!(t.get(&[0]), None);
        assert_eq!(t.get(&[0, 0, 0]), None);
    }

    #[test]
    fn test_set() {
        let mut t: Tensor<f64> = Tensor::zeros(&[2, 3]);
        t.set(&[1, 2], 42.0).unwrap();
        assert_eq!(t.get(&[1, 2]), Some(&42.0));
        assert_eq!(t.data()[5], 42.0);
    }

    #[test]
    fn test_set_errors() {
        let mut t: Tensor<f64> = Tensor::zeros(&[2, 3]);
        assert_eq!(
            t.set(&[0], 1.0),
            Err(TensorError::WrongNumberOfIndices {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            t.set(&[0, 3], 1.0),
            Err(TensorError::IndexOutOfBounds {
                index: 3,
                dim_size: 3
            })
        );
    }

    #[test]
    fn test_get_mut() {
        let mut t: Tensor<f64> = Tensor::ones(&[2, 2]);
        *t.get_mut(&[1, 0]).unwrap() = 7.0;
        assert_eq!(t.data(), &[1.0, 1.0, 7.0, 1.0]);
    }

    #[test]
    fn test_scalar_tensor() {
        let t: Tensor<f64> = Tensor::zeros(&[]);
        assert_eq!(t.ndim(), 0);
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());

        let s: Tensor<f64> = Tensor::scalar(3.5);
        assert_eq!(s.shape(), &[] as &[usize]);
        assert_eq!(s.get(&[]), Some(&3.5));
    }

    #[test]
    fn test_zero_length_axis() {
        let t: Tensor<f64> = Tensor::zeros(&[3, 0]);
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
        assert!(Tensor::<f64>::from_vec(vec![], &[0, 4]).is_ok());
    }

    #[test]
    fn test_arange() {
        let t = Tensor::<f64>::arange(4);
        assert_eq!(t.shape(), &[4]);
        assert_eq!(t.data(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_reshape() {
        let t = Tensor::<f64>::arange(24);
        let t3 = t.reshape(&[2, 3, 4]).unwrap();
        assert_eq!(t3.strides(), &[12, 4, 1]);
        assert_eq!(t3.get(&[1, 0, 0]), Some(&12.0));
        assert_eq!(t3.get(&[0, 1, 2]), Some(&6.0));
        assert_eq!(t.data(), t3.data());
    }

    #[test]
    fn test_reshape_invalid_size() {
        let t = Tensor::<f64>::arange(6);
        assert!(t.reshape(&[5]).is_err());
        assert!(t.reshape(&[2, 2]).is_err());
        assert!(t.reshape(&[7]).is_err());
    }

    #[test]
    fn test_reshape_to_scalar() {
        let t: Tensor<f64> = Tensor::from_vec(vec![9.0], &[1, 1]).unwrap();
        let s = t.into_reshape(&[]).unwrap();
        assert_eq!(s.ndim(), 0);
        assert_eq!(s.get(&[]), Some(&9.0));
    }

    #[test]
    fn test_permutedims_3d() {
        let mut t: Tensor<f64> = Tensor::zeros(&[2, 3, 4]);
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    t.set(&[i, j, k], (i * 100 + j * 10 + k) as f64).unwrap();
                }
            }
        }

        let t2 = t.permutedims(&[2, 0, 1]).unwrap();
        assert_eq!(t2.shape(), &[4, 2, 3]);

        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    assert_eq!(t.get(&[i, j, k]), t2.get(&[k, i, j]));
                }
            }
        }
    }

    #[test]
    fn test_transpose() {
        let t: Tensor<f64> = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
        let tt = t.transpose().unwrap();
        assert_eq!(tt.shape(), &[3, 2]);
        assert_eq!(tt.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_transpose_requires_matrix() {
        let t = Tensor::<f64>::zeros(&[2, 3, 4]);
        assert_eq!(
            t.transpose().unwrap_err(),
            TensorError::RankMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_fn_row_major() {
        let mut next = 0.0;
        let t: Tensor<f64> = Tensor::from_fn(&[2, 3], || {
            next += 1.0;
            next
        });
        assert_eq!(t.get(&[0, 2]), Some(&3.0));
        assert_eq!(t.get(&[1, 0]), Some(&4.0));
    }

    #[test]
    fn test_from_fn_zero_length_axis() {
        let mut calls = 0;
        let t: Tensor<f64> = Tensor::from_fn(&[4, 0], || {
            calls += 1;
            1.0
        });
        assert!(t.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_zeros_huge_empty_shape() {
        let t: Tensor<f64> = Tensor::zeros(&[0, 1 << 33, 1 << 33]);
        assert!(t.is_empty());
        assert_eq!(t.shape(), &[0, 1 << 33, 1 << 33]);

        let t: Tensor<f64> = Tensor::zeros(&[1 << 40, 1 << 40, 0]);
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn test_dense_tensor_alias() {
        let t: DenseTensor<f64> = DenseTensor::zeros(&[2, 3]);
        assert_eq!(t.shape(), &[2, 3]);
    }
}
