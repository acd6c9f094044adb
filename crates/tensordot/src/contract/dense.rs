//! Dense contraction entry points.

use crate::backend::{ContractionBackend, GemmBackend, GenericBackend, RayonBackend};
use crate::config::{Backend, ContractConfig};
use crate::contract::{ContractAxes, ContractionProperties};
use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Contract two tensors over paired axes.
///
/// `axes` is anything convertible to [`ContractAxes`]: a `usize` `k`, or a
/// pair of axis lists such as `([1, 2], [2, 1])`. The backend comes from
/// [`ContractConfig::global`], so `TENSORDOT_BACKEND` and
/// `TENSORDOT_WORK_THRESHOLD` apply here.
///
/// # Errors
///
/// Returns an axis error (see [`TensorError::is_axis_error`]) if the pairing
/// is invalid for the operand shapes. Nothing is computed in that case.
///
/// # Example
///
/// ```
/// use tensordot::{Tensor, contract};
///
/// let a = Tensor::<f64>::arange(24).into_reshape(&[2, 3, 4]).unwrap();
/// let b = Tensor::<f64>::ones(&[2, 4, 2]);
///
/// let err = contract(&a, &b, ([1, 2], [2, 1])).unwrap_err();
/// assert!(err.is_axis_error());
///
/// let b = Tensor::<f64>::ones(&[2, 4, 3]);
/// let c = contract(&a, &b, ([1, 2], [2, 1])).unwrap();
/// assert_eq!(c.shape(), &[2, 2]);
/// assert_eq!(c.data(), &[66.0, 66.0, 210.0, 210.0]);
/// ```
pub fn contract<ElT: Scalar>(
    a: &DenseTensor<ElT>,
    b: &DenseTensor<ElT>,
    axes: impl Into<ContractAxes>,
) -> Result<DenseTensor<ElT>, TensorError> {
    contract_with(a, b, axes, ContractConfig::global())
}

/// Contract two tensors with an explicit configuration.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(shape_a = ?a.shape(), shape_b = ?b.shape())
)]
pub fn contract_with<ElT: Scalar>(
    a: &DenseTensor<ElT>,
    b: &DenseTensor<ElT>,
    axes: impl Into<ContractAxes>,
    config: &ContractConfig,
) -> Result<DenseTensor<ElT>, TensorError> {
    let props = properties(a, b, axes.into())?;
    let mut result = DenseTensor::zeros(&props.output_shape);
    dispatch(&mut result, a, b, &props, config);
    Ok(result)
}

/// Contract two tensors into a pre-allocated destination.
///
/// Every element of `dest` is overwritten.
///
/// # Errors
///
/// Returns an axis error if the pairing is invalid, or
/// `TensorError::OutputShapeMismatch` if `dest` does not have the result
/// shape. `dest` is left untouched on error.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(shape_a = ?a.shape(), shape_b = ?b.shape(), shape_dest = ?dest.shape())
)]
pub fn contract_into<ElT: Scalar>(
    dest: &mut DenseTensor<ElT>,
    a: &DenseTensor<ElT>,
    b: &DenseTensor<ElT>,
    axes: impl Into<ContractAxes>,
    config: &ContractConfig,
) -> Result<(), TensorError> {
    let props = properties(a, b, axes.into())?;
    if dest.shape() != props.output_shape.as_slice() {
        return Err(TensorError::OutputShapeMismatch {
            expected: props.output_shape,
            actual: dest.shape().to_vec(),
        });
    }
    dispatch(dest, a, b, &props, config);
    Ok(())
}

/// Contract two tensors using the faer GEMM backend regardless of size.
///
/// # Example
///
/// ```
/// use tensordot::Tensor;
/// use tensordot::contract::contract_gemm;
///
/// let a = Tensor::<f64>::ones(&[2, 3]);
/// let b = Tensor::<f64>::ones(&[3, 4]);
///
/// let c = contract_gemm(&a, &b, ([1], [0])).unwrap();
/// assert_eq!(c.shape(), &[2, 4]);
/// ```
pub fn contract_gemm<ElT: Scalar>(
    a: &DenseTensor<ElT>,
    b: &DenseTensor<ElT>,
    axes: impl Into<ContractAxes>,
) -> Result<DenseTensor<ElT>, TensorError> {
    contract_with(
        a,
        b,
        axes,
        &ContractConfig::default().with_backend(Backend::Gemm),
    )
}

fn properties<ElT: Scalar>(
    a: &DenseTensor<ElT>,
    b: &DenseTensor<ElT>,
    axes: ContractAxes,
) -> Result<ContractionProperties, TensorError> {
    axes.resolve(a.ndim(), b.ndim())
        .and_then(|(axes_a, axes_b)| {
            ContractionProperties::compute(a.shape(), &axes_a, b.shape(), &axes_b)
        })
        .inspect_err(|err| tracing::debug!(%err, ?axes, "rejected axis pairing"))
}

fn dispatch<ElT: Scalar>(
    dest: &mut DenseTensor<ElT>,
    a: &DenseTensor<ElT>,
    b: &DenseTensor<ElT>,
    props: &ContractionProperties,
    config: &ContractConfig,
) {
    let backend = config.select(props);
    tracing::debug!(
        %backend,
        output_shape = ?props.output_shape,
        dleft = props.dleft,
        dmid = props.dmid,
        dright = props.dright,
        "contracting"
    );
    match backend {
        Backend::Gemm => GemmBackend::contract_into(dest, a, b, props),
        Backend::Rayon => RayonBackend::contract_into(dest, a, b, props),
        Backend::Generic | Backend::Auto => GenericBackend::contract_into(dest, a, b, props),
    }
}
