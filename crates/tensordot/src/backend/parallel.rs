//! Rayon-parallel strided backend.

use rayon::prelude::*;

use crate::backend::ContractionBackend;
use crate::backend::strided::StridedPlan;
use crate::contract::ContractionProperties;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Strided-loop backend that partitions output rows across the rayon pool.
///
/// Each task owns a disjoint slice of the output and reads the operands
/// through shared offset tables, so results are identical to
/// [`GenericBackend`](crate::backend::GenericBackend) bit for bit.
pub struct RayonBackend;

impl ContractionBackend for RayonBackend {
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
        let (a_data, b_data) = (a.data(), b.data());
        dest.data_mut()
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(i, row)| plan.fill_row(a_data, b_data, i, row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::GenericBackend;

    #[test]
    fn test_rayon_matches_generic() {
        let a = DenseTensor::<f64>::arange(60).into_reshape(&[3, 4, 5]).unwrap();
        let b = DenseTensor::<f64>::arange(40).into_reshape(&[5, 2, 4]).unwrap();
        let props = ContractionProperties::compute(a.shape(), &[2, 1], b.shape(), &[0, 2]).unwrap();

        let mut expected = DenseTensor::zeros(&props.output_shape);
        GenericBackend::contract_into(&mut expected, &a, &b, &props);

        let mut actual = DenseTensor::zeros(&props.output_shape);
        RayonBackend::contract_into(&mut actual, &a, &b, &props);

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_rayon_outer_product() {
        let a: DenseTensor<f64> = DenseTensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
        let b: DenseTensor<f64> = DenseTensor::from_vec(vec![3.0, 4.0, 5.0], &[3]).unwrap();
        let props = ContractionProperties::compute(a.shape(), &[], b.shape(), &[]).unwrap();

        let mut c = DenseTensor::zeros(&props.output_shape);
        RayonBackend::contract_into(&mut c, &a, &b, &props);
        assert_eq!(c.data(), &[3.0, 4.0, 5.0, 6.0, 8.0, 10.0]);
    }
}
