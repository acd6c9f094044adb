//! Contraction properties for GEMM-style evaluation.
//!
//! `ContractionProperties` validates a resolved axis pairing against the
//! operand shapes and records everything a backend needs:
//! - which axes are contracted and which are static
//! - the output shape
//! - GEMM dimensions (dleft, dmid, dright)
//! - permutations that bring A to `[static, contracted]` and B to
//!   `[contracted, static]`

use crate::error::{Operand, TensorError};
use crate::strides::num_elements;

/// Properties of a validated contraction `C = tensordot(A, B, (axes_a, axes_b))`.
///
/// - `dleft` = product of A's static dimensions
/// - `dmid` = product of contracted dimensions
/// - `dright` = product of B's static dimensions
///
/// The contraction is then `C(dleft, dright) = A(dleft, dmid) * B(dmid, dright)`
/// once A and B are permuted by `perm_a` / `perm_b`. The output shape is
/// A's static axis lengths followed by B's, each in original axis order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractionProperties {
    /// Contracted axis pairs: (axis in A, axis in B), in the caller's order.
    pub contracted_pairs: Vec<(usize, usize)>,

    /// Static (uncontracted) axes of A, ascending.
    pub uncontracted_a: Vec<usize>,

    /// Static (uncontracted) axes of B, ascending.
    pub uncontracted_b: Vec<usize>,

    /// Length of each contracted axis pair.
    pub contracted_dims: Vec<usize>,

    /// Shape of the result.
    pub output_shape: Vec<usize>,

    pub dleft: usize,
    pub dmid: usize,
    pub dright: usize,

    /// Whether A needs permutation before GEMM.
    pub permute_a: bool,

    /// Whether B needs permutation before GEMM.
    pub permute_b: bool,

    /// Permutation for A: `[uncontracted..., contracted...]`.
    pub perm_a: Vec<usize>,

    /// Permutation for B: `[contracted..., uncontracted...]`.
    pub perm_b: Vec<usize>,
}

impl ContractionProperties {
    /// Validate an axis pairing and compute contraction properties.
    ///
    /// `axes_a[i]` of A is contracted against `axes_b[i]` of B.
    ///
    /// Checks run in this order, and the first failure is reported:
    /// list lengths, axis ranges and duplicates (A before B), then
    /// pairwise axis lengths.
    ///
    /// # Errors
    ///
    /// - `TensorError::InvalidAxes` if the lists differ in length.
    /// - `TensorError::AxisOutOfRange` if an axis is not `< ndim`.
    /// - `TensorError::DuplicateAxis` if an axis repeats within one list.
    /// - `TensorError::ShapeMismatch` if a pair has unequal lengths.
    ///
    /// # Example
    ///
    /// ```
    /// use tensordot::contract::ContractionProperties;
    ///
    /// // Matrix multiplication: C[i,k] = A[i,j] * B[j,k]
    /// let props = ContractionProperties::compute(&[2, 3], &[1], &[3, 4], &[0]).unwrap();
    ///
    /// assert_eq!(props.dleft, 2);
    /// assert_eq!(props.dmid, 3);
    /// assert_eq!(props.dright, 4);
    /// assert_eq!(props.output_shape, vec![2, 4]);
    /// ```
    pub fn compute(
        shape_a: &[usize],
        axes_a: &[usize],
        shape_b: &[usize],
        axes_b: &[usize],
    ) -> Result<Self, TensorError> {
        if axes_a.len() != axes_b.len() {
            return Err(TensorError::InvalidAxes {
                len_a: axes_a.len(),
                len_b: axes_b.len(),
            });
        }

        let contracted_a = validate_axes(axes_a, shape_a.len(), Operand::A)?;
        let contracted_b = validate_axes(axes_b, shape_b.len(), Operand::B)?;

        let mut contracted_dims = Vec::with_capacity(axes_a.len());
        for (&axis_a, &axis_b) in axes_a.iter().zip(axes_b) {
            let (size_a, size_b) = (shape_a[axis_a], shape_b[axis_b]);
            if size_a != size_b {
                return Err(TensorError::ShapeMismatch {
                    axis_a,
                    axis_b,
                    size_a,
                    size_b,
                });
            }
            contracted_dims.push(size_a);
        }

        let uncontracted_a: Vec<usize> = (0..shape_a.len())
            .filter(|&i| !contracted_a[i])
            .collect();
        let uncontracted_b: Vec<usize> = (0..shape_b.len())
            .filter(|&j| !contracted_b[j])
            .collect();

        let output_shape: Vec<usize> = uncontracted_a
            .iter()
            .map(|&i| shape_a[i])
            .chain(uncontracted_b.iter().map(|&j| shape_b[j]))
            .collect();

        // Zero-length axes are kept: an empty product is 1, a zero factor is 0.
        let dleft = num_elements(&output_shape[..uncontracted_a.len()]);
        let dmid = num_elements(&contracted_dims);
        let dright = num_elements(&output_shape[uncontracted_a.len()..]);

        let perm_a: Vec<usize> = uncontracted_a
            .iter()
            .chain(axes_a.iter())
            .copied()
            .collect();
        let perm_b: Vec<usize> = axes_b
            .iter()
            .chain(uncontracted_b.iter())
            .copied()
            .collect();

        Ok(Self {
            contracted_pairs: axes_a.iter().copied().zip(axes_b.iter().copied()).collect(),
            permute_a: !is_identity_perm(&perm_a),
            permute_b: !is_identity_perm(&perm_b),
            uncontracted_a,
            uncontracted_b,
            contracted_dims,
            output_shape,
            dleft,
            dmid,
            dright,
            perm_a,
            perm_b,
        })
    }

    /// Contracted axes of A, in pairing order.
    pub fn axes_a(&self) -> impl Iterator<Item = usize> + '_ {
        self.contracted_pairs.iter().map(|&(i, _)| i)
    }

    /// Contracted axes of B, in pairing order.
    pub fn axes_b(&self) -> impl Iterator<Item = usize> + '_ {
        self.contracted_pairs.iter().map(|&(_, j)| j)
    }

    /// Number of output elements.
    pub fn output_len(&self) -> usize {
        self.dleft.saturating_mul(self.dright)
    }

    /// Number of multiply-adds the contraction performs.
    pub fn work(&self) -> usize {
        self.dleft
            .saturating_mul(self.dmid)
            .saturating_mul(self.dright)
    }

    /// Check if this is an outer product (no contracted indices).
    pub fn is_outer_product(&self) -> bool {
        self.contracted_pairs.is_empty()
    }

    /// Check if this is a full contraction (rank-0 result).
    pub fn is_full_contraction(&self) -> bool {
        self.uncontracted_a.is_empty() && self.uncontracted_b.is_empty()
    }
}

/// Range- and duplicate-check one axis list, returning a membership mask.
fn validate_axes(axes: &[usize], ndim: usize, operand: Operand) -> Result<Vec<bool>, TensorError> {
    let mut seen = vec![false; ndim];
    for &axis in axes {
        if axis >= ndim {
            return Err(TensorError::AxisOutOfRange {
                operand,
                axis,
                ndim,
            });
        }
        if seen[axis] {
            return Err(TensorError::DuplicateAxis { operand, axis });
        }
        seen[axis] = true;
    }
    Ok(seen)
}

/// Check if a permutation is the identity permutation.
fn is_identity_perm(perm: &[usize]) -> bool {
    perm.iter().enumerate().all(|(i, &p)| i == p)
}
