//! Contraction backend trait.

use crate::contract::ContractionProperties;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Backend trait for dense tensor contraction.
///
/// Implementations overwrite every element of `dest`; its prior contents
/// are ignored.
pub trait ContractionBackend {
    /// Contract `a` with `b` into `dest`.
    ///
    /// # Arguments
    ///
    /// * `dest` - Output DenseTensor with shape `props.output_shape`
    /// * `a` - First operand
    /// * `b` - Second operand
    /// * `props` - Properties computed from `a.shape()` and `b.shape()`
    ///
    /// # Panics
    ///
    /// May panic if the shapes disagree with `props`.
    fn contract_into<ElT: Scalar>(
        dest: &mut DenseTensor<ElT>,
        a: &DenseTensor<ElT>,
        b: &DenseTensor<ElT>,
        props: &ContractionProperties,
    );
}
