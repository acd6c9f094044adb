//! Zero-copy row-major matrix views of dense tensors.
//!
//! Dense tensors store their elements in row-major order, so any split of
//! the axes into a leading group (rows) and a trailing group (columns) is a
//! contiguous row-major matrix that faer can view without copying.

use faer::{MatMut, MatRef};

use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Extension trait for viewing a DenseTensor as a faer matrix.
pub trait AsFaerMat<T: Scalar> {
    /// View tensor data as an immutable row-major faer matrix (zero-copy).
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols != tensor.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use tensordot::Tensor;
    /// use tensordot::backend::AsFaerMat;
    ///
    /// let t: Tensor<f64> = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let mat = t.as_faer_mat(2, 3);
    /// assert_eq!(mat.nrows(), 2);
    /// assert_eq!(mat.ncols(), 3);
    /// assert_eq!(mat[(1, 0)], 4.0);
    /// ```
    fn as_faer_mat(&self, rows: usize, cols: usize) -> MatRef<'_, T>;

    /// View tensor data as a mutable row-major faer matrix (zero-copy).
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols != tensor.len()`.
    fn as_faer_mat_mut(&mut self, rows: usize, cols: usize) -> MatMut<'_, T>;
}

impl<T: Scalar> AsFaerMat<T> for DenseTensor<T> {
    fn as_faer_mat(&self, rows: usize, cols: usize) -> MatRef<'_, T> {
        assert_eq!(
            rows * cols,
            self.len(),
            "Matrix dimensions ({} x {} = {}) must match tensor size ({})",
            rows,
            cols,
            rows * cols,
            self.len()
        );
        MatRef::from_row_major_slice(self.data(), rows, cols)
    }

    fn as_faer_mat_mut(&mut self, rows: usize, cols: usize) -> MatMut<'_, T> {
        assert_eq!(
            rows * cols,
            self.len(),
            "Matrix dimensions ({} x {} = {}) must match tensor size ({})",
            rows,
            cols,
            rows * cols,
            self.len()
        );
        MatMut::from_row_major_slice_mut(self.data_mut(), rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_as_faer_mat_row_major() {
        let t: DenseTensor<f64> =
            DenseTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();

        let mat = t.as_faer_mat(2, 3);
        assert_relative_eq!(mat[(0, 0)], 1.0);
        assert_relative_eq!(mat[(0, 1)], 2.0);
        assert_relative_eq!(mat[(0, 2)], 3.0);
        assert_relative_eq!(mat[(1, 0)], 4.0);
        assert_relative_eq!(mat[(1, 2)], 6.0);
    }

    #[test]
    fn test_merged_axes() {
        // 2x3x4 tensor viewed as 6x4: row r = (i, j) with r = 3i + j.
        let t = DenseTensor::<f64>::arange(24).into_reshape(&[2, 3, 4]).unwrap();
        let mat = t.as_faer_mat(6, 4);
        assert_relative_eq!(mat[(4, 1)], *t.get(&[1, 1, 1]).unwrap());
    }

    #[test]
    fn test_as_faer_mat_mut() {
        let mut t: DenseTensor<f64> = DenseTensor::zeros(&[2, 3]);

        {
            let mut mat = t.as_faer_mat_mut(2, 3);
            mat[(0, 2)] = 1.0;
            mat[(1, 1)] = 5.0;
        }

        assert_relative_eq!(*t.get(&[0, 2]).unwrap(), 1.0);
        assert_relative_eq!(*t.get(&[1, 1]).unwrap(), 5.0);
    }

    #[test]
    #[should_panic(expected = "Matrix dimensions")]
    fn test_as_faer_mat_dimension_mismatch() {
        let t: DenseTensor<f64> = DenseTensor::zeros(&[2, 3]);
        let _ = t.as_faer_mat(3, 3);
    }

    #[test]
    fn test_zero_copy_verification() {
        let t: DenseTensor<f64> =
            DenseTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();

        let mat = t.as_faer_mat(2, 3);
        assert_eq!(
            t.data().as_ptr(),
            mat.as_ptr(),
            "faer matrix should share memory with tensor"
        );
    }
}
