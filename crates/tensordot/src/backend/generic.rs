//! Generic (sequential loop-based) backend implementation.

use crate::backend::strided::StridedPlan;
use crate::backend::ContractionBackend;
use crate::contract::ContractionProperties;
use crate::scalar::Scalar;
use crate::strides::offset_table;
use crate::tensor::DenseTensor;

/// Generic backend using sequential strided loops.
///
/// This backend is always available and serves as the reference the
/// other backends are checked against. It's suitable for small tensors
/// and debugging.
pub struct GenericBackend;

impl GenericBackend {
    /// Copy `src` into `dest` with axes reordered so that dest axis `i` is
    /// src axis `perm[i]`. `dest` must already have the permuted shape.
    pub fn permute_into<ElT: Scalar>(
        dest: &mut DenseTensor<ElT>,
        src: &DenseTensor<ElT>,
        perm: &[usize],
    ) {
        // Walking src's axes in `perm` order visits src offsets in dest's
        // row-major order.
        let offsets = offset_table(perm, src.shape(), src.strides());
        let src_data = src.data();
        for (out, &offset) in dest.data_mut().iter_mut().zip(&offsets) {
            *out = src_data[offset];
        }
    }
}

impl ContractionBackend for GenericBackend {
    fn contract_into<ElT: Scalar>(
        dest: &mut DenseTensor<ElT>,
        a: &DenseTensor<ElT>,
        b: &DenseTensor<ElT>,
        props: &ContractionProperties,
    ) {
        if dest.is_empty() {
            return;
        }
        let plan = StridedPlan::new(a, b, props);
        let row_len = plan.row_len();
        for (i, row) in dest.data_mut().chunks_mut(row_len).enumerate() {
            plan.fill_row(a.data(), b.data(), i, row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_permute_transpose() {
        let src: DenseTensor<f64> =
            DenseTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();

        let mut dest: DenseTensor<f64> = DenseTensor::zeros(&[3, 2]);

        GenericBackend::permute_into(&mut dest, &src, &[1, 0]);

        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(src.get(&[i, j]), dest.get(&[j, i]));
            }
        }
        assert_eq!(dest.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_generic_permute_3d() {
        let mut src: DenseTensor<f64> = DenseTensor::zeros(&[2, 3, 4]);
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    src.set(&[i, j, k], (i * 100 + j * 10 + k) as f64).unwrap();
                }
            }
        }

        // Permute [0,1,2] -> [2,0,1]: shape 2x3x4 -> 4x2x3
        let mut dest: DenseTensor<f64> = DenseTensor::zeros(&[4, 2, 3]);
        GenericBackend::permute_into(&mut dest, &src, &[2, 0, 1]);

        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    assert_eq!(src.get(&[i, j, k]), dest.get(&[k, i, j]));
                }
            }
        }
    }

    #[test]
    fn test_generic_matmul() {
        // [[1,2],[3,4]] . [[5,6],[7,8]] = [[19,22],[43,50]]
        let a: DenseTensor<f64> = DenseTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let b: DenseTensor<f64> = DenseTensor::from_vec(vec![5.0, 6.0, 7.0, 8.0], &[2, 2]).unwrap();
        let props = ContractionProperties::compute(a.shape(), &[1], b.shape(), &[0]).unwrap();

        let mut c = DenseTensor::zeros(&props.output_shape);
        GenericBackend::contract_into(&mut c, &a, &b, &props);
        assert_eq!(c.data(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_generic_overwrites_destination() {
        let a: DenseTensor<f64> = DenseTensor::ones(&[3]);
        let b: DenseTensor<f64> = DenseTensor::ones(&[3]);
        let props = ContractionProperties::compute(a.shape(), &[0], b.shape(), &[0]).unwrap();

        let mut c: DenseTensor<f64> = DenseTensor::scalar(100.0);
        GenericBackend::contract_into(&mut c, &a, &b, &props);
        assert_eq!(c.data(), &[3.0]);
    }

    #[test]
    fn test_generic_empty_contracted_axis() {
        let a: DenseTensor<f64> = DenseTensor::zeros(&[2, 0]);
        let b: DenseTensor<f64> = DenseTensor::zeros(&[0, 3]);
        let props = ContractionProperties::compute(a.shape(), &[1], b.shape(), &[0]).unwrap();

        let mut c: DenseTensor<f64> = DenseTensor::ones(&[2, 3]);
        GenericBackend::contract_into(&mut c, &a, &b, &props);
        assert!(c.data().iter().all(|&x| x == 0.0));
    }
}
