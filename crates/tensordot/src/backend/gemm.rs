//! GEMM-based contraction using faer.
//!
//! Operands are permuted (only when needed) so that A is `[static, contracted]`
//! and B is `[contracted, static]`; both are then contiguous row-major
//! matrices `A(dleft, dmid)` and `B(dmid, dright)`, and the output buffer is
//! directly `C(dleft, dright)`.

use std::borrow::Cow;

use faer::linalg::matmul::matmul;
use faer::{Accum, Par};

use crate::backend::{AsFaerMat, ContractionBackend, GenericBackend};
use crate::contract::ContractionProperties;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Backend that lowers contraction to a single faer matrix multiplication.
pub struct GemmBackend;

impl ContractionBackend for GemmBackend {
    fn contract_into<ElT: Scalar>(
        dest: &mut DenseTensor<ElT>,
        a: &DenseTensor<ElT>,
        b: &DenseTensor<ElT>,
        props: &ContractionProperties,
    ) {
        if dest.is_empty() {
            return;
        }
        if props.dmid == 0 {
            dest.fill(ElT::zero());
            return;
        }

        let a_work = permuted(a, &props.perm_a, props.permute_a);
        let b_work = permuted(b, &props.perm_b, props.permute_b);

        let a_mat = a_work.as_faer_mat(props.dleft, props.dmid);
        let b_mat = b_work.as_faer_mat(props.dmid, props.dright);
        let mut c_mat = dest.as_faer_mat_mut(props.dleft, props.dright);

        // C = 1 * A * B, overwriting C
        matmul(
            c_mat.as_mut(),
            Accum::Replace,
            a_mat,
            b_mat,
            ElT::one(),
            Par::Seq,
        );
    }
}

fn permuted<'a, ElT: Scalar>(
    tensor: &'a DenseTensor<ElT>,
    perm: &[usize],
    needed: bool,
) -> Cow<'a, DenseTensor<ElT>> {
    if !needed {
        return Cow::Borrowed(tensor);
    }
    let shape: Vec<usize> = perm.iter().map(|&p| tensor.shape()[p]).collect();
    let mut out = DenseTensor::zeros(&shape);
    GenericBackend::permute_into(&mut out, tensor, perm);
    Cow::Owned(out)
}
