//! Axis-pairing specifications for contraction.

use crate::error::TensorError;

/// Which axes of the two operands are contracted against each other.
///
/// Both forms are resolved once, up front, into a canonical pair of
/// equal-length axis lists `(axes_a, axes_b)`.
///
/// # Examples
///
/// ```
/// use tensordot::ContractAxes;
///
/// // Last two axes of a rank-3 tensor against the first two of a rank-2 tensor.
/// let (la, lb) = ContractAxes::from(2).resolve(3, 2).unwrap();
/// assert_eq!(la, vec![1, 2]);
/// assert_eq!(lb, vec![0, 1]);
///
/// let (la, lb) = ContractAxes::from(([1, 2], [2, 1])).resolve(3, 3).unwrap();
/// assert_eq!(la, vec![1, 2]);
/// assert_eq!(lb, vec![2, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractAxes {
    /// Contract `axes_a[i]` of the first operand with `axes_b[i]` of the second.
    Explicit(Vec<usize>, Vec<usize>),
    /// Contract the last `k` axes of the first operand with the first `k`
    /// axes of the second, in order.
    LastFirst(usize),
}

impl ContractAxes {
    /// Build an explicit axis pairing.
    pub fn explicit(axes_a: impl Into<Vec<usize>>, axes_b: impl Into<Vec<usize>>) -> Self {
        ContractAxes::Explicit(axes_a.into(), axes_b.into())
    }

    /// No contracted axes: the outer product.
    pub fn none() -> Self {
        ContractAxes::LastFirst(0)
    }

    /// Resolve into canonical `(axes_a, axes_b)` lists for operands of the
    /// given ranks.
    ///
    /// Only the list lengths (and `k` against the ranks) are checked here;
    /// range, duplicate and size checks happen in
    /// [`ContractionProperties::compute`](super::ContractionProperties::compute).
    ///
    /// # Errors
    ///
    /// - `TensorError::InvalidAxes` if the explicit lists differ in length.
    /// - `TensorError::InvalidContractionCount` if `k > min(ndim_a, ndim_b)`.
    pub fn resolve(
        &self,
        ndim_a: usize,
        ndim_b: usize,
    ) -> Result<(Vec<usize>, Vec<usize>), TensorError> {
        match self {
            ContractAxes::Explicit(axes_a, axes_b) => {
                if axes_a.len() != axes_b.len() {
                    return Err(TensorError::InvalidAxes {
                        len_a: axes_a.len(),
                        len_b: axes_b.len(),
                    });
                }
                Ok((axes_a.clone(), axes_b.clone()))
            }
            &ContractAxes::LastFirst(k) => {
                let max = ndim_a.min(ndim_b);
                if k > max {
                    return Err(TensorError::InvalidContractionCount { k, max });
                }
                Ok(((ndim_a - k..ndim_a).collect(), (0..k).collect()))
            }
        }
    }
}

impl From<usize> for ContractAxes {
    fn from(k: usize) -> Self {
        ContractAxes::LastFirst(k)
    }
}

impl From<(Vec<usize>, Vec<usize>)> for ContractAxes {
    fn from((axes_a, axes_b): (Vec<usize>, Vec<usize>)) -> Self {
        ContractAxes::Explicit(axes_a, axes_b)
    }
}

impl From<(&[usize], &[usize])> for ContractAxes {
    fn from((axes_a, axes_b): (&[usize], &[usize])) -> Self {
        ContractAxes::Explicit(axes_a.to_vec(), axes_b.to_vec())
    }
}

impl<const N: usize, const M: usize> From<([usize; N], [usize; M])> for ContractAxes {
    fn from((axes_a, axes_b): ([usize; N], [usize; M])) -> Self {
        ContractAxes::Explicit(axes_a.to_vec(), axes_b.to_vec())
    }
}
