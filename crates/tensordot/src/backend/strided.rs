//! Precomputed offset tables shared by the loop-based backends.

use crate::contract::ContractionProperties;
use crate::scalar::Scalar;
use crate::strides::offset_table;
use crate::tensor::DenseTensor;

/// Buffer offsets for every static and contracted index combination.
///
/// Output element `(i, j)` (A-static combination `i`, B-static combination
/// `j`, row-major) is the sum over `c` of
/// `a[a_static[i] + a_contracted[c]] * b[b_static[j] + b_contracted[c]]`.
/// The tables are read-only, so rows can be filled independently.
#[derive(Debug)]
pub(crate) struct StridedPlan {
    a_static: Vec<usize>,
    b_static: Vec<usize>,
    a_contracted: Vec<usize>,
    b_contracted: Vec<usize>,
}

impl StridedPlan {
    pub(crate) fn new<ElT: Scalar>(
        a: &DenseTensor<ElT>,
        b: &DenseTensor<ElT>,
        props: &ContractionProperties,
    ) -> Self {
        let axes_a: Vec<usize> = props.axes_a().collect();
        let axes_b: Vec<usize> = props.axes_b().collect();
        Self {
            a_static: offset_table(&props.uncontracted_a, a.shape(), a.strides()),
            b_static: offset_table(&props.uncontracted_b, b.shape(), b.strides()),
            a_contracted: offset_table(&axes_a, a.shape(), a.strides()),
            b_contracted: offset_table(&axes_b, b.shape(), b.strides()),
        }
    }

    /// Width of one output row (number of B-static combinations).
    pub(crate) fn row_len(&self) -> usize {
        self.b_static.len()
    }

    #[inline]
    fn element<ElT: Scalar>(&self, a: &[ElT], b: &[ElT], i: usize, j: usize) -> ElT {
        let (base_a, base_b) = (self.a_static[i], self.b_static[j]);
        self.a_contracted
            .iter()
            .zip(&self.b_contracted)
            .fold(ElT::zero(), |acc, (&ca, &cb)| {
                acc + a[base_a + ca] * b[base_b + cb]
            })
    }

    /// Fill output row `i`.
    pub(crate) fn fill_row<ElT: Scalar>(&self, a: &[ElT], b: &[ElT], i: usize, row: &mut [ElT]) {
        for (j, out) in row.iter_mut().enumerate() {
            *out = self.element(a, b, i, j);
        }
    }
}
