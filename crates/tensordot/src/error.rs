//! Error types for tensordot.

use std::fmt;

use thiserror::Error;

/// Identifies which contraction operand an axis error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The first (left) operand.
    A,
    /// The second (right) operand.
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => f.write_str("first"),
            Operand::B => f.write_str("second"),
        }
    }
}

/// Errors that can occur in tensor operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TensorError {
    /// The two contraction axis lists have different lengths.
    #[error("invalid axes: contraction lists have lengths {len_a} and {len_b}")]
    InvalidAxes { len_a: usize, len_b: usize },

    /// More trailing/leading axes requested than either operand has.
    #[error("invalid axes: cannot contract {k} axes, operands allow at most {max}")]
    InvalidContractionCount { k: usize, max: usize },

    /// An axis index appears twice in one operand's contraction list.
    #[error("duplicate axis {axis} in contraction list of {operand} operand")]
    DuplicateAxis { operand: Operand, axis: usize },

    /// An axis index is not a valid axis of its operand.
    #[error("axis {axis} is out of range for {operand} operand of rank {ndim}")]
    AxisOutOfRange {
        operand: Operand,
        axis: usize,
        ndim: usize,
    },

    /// A contracted axis pair has unequal lengths.
    #[error(
        "shape mismatch: axis {axis_a} of first operand has size {size_a}, \
         axis {axis_b} of second operand has size {size_b}"
    )]
    ShapeMismatch {
        axis_a: usize,
        axis_b: usize,
        size_a: usize,
        size_b: usize,
    },

    /// Data length does not match the element count implied by a shape.
    #[error("data length mismatch: expected {expected} elements, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// A pre-allocated output tensor has the wrong shape.
    #[error("output shape mismatch: expected {expected:?}, got {actual:?}")]
    OutputShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Index out of bounds.
    #[error("index out of bounds: index {index} is out of range for dimension {dim_size}")]
    IndexOutOfBounds { index: usize, dim_size: usize },

    /// Wrong number of indices provided.
    #[error("wrong number of indices: expected {expected}, got {actual}")]
    WrongNumberOfIndices { expected: usize, actual: usize },

    /// Invalid permutation.
    #[error("invalid permutation {perm:?} for tensor with {ndim} dimensions")]
    InvalidPermutation { perm: Vec<usize>, ndim: usize },

    /// Operation requires specific tensor rank.
    #[error("expected tensor of rank {expected}, got rank {actual}")]
    RankMismatch { expected: usize, actual: usize },

    /// Nested input is not rectangular.
    #[error("ragged nested data at depth {depth}")]
    RaggedData { depth: usize },
}

impl TensorError {
    /// Whether the axis lists themselves are malformed (unequal lengths, or
    /// a contraction count larger than an operand's rank).
    pub fn is_invalid_axes(&self) -> bool {
        matches!(
            self,
            TensorError::InvalidAxes { .. } | TensorError::InvalidContractionCount { .. }
        )
    }

    /// Whether this error describes an invalid contraction axis specification.
    pub fn is_axis_error(&self) -> bool {
        matches!(
            self,
            TensorError::InvalidAxes { .. }
                | TensorError::InvalidContractionCount { .. }
                | TensorError::DuplicateAxis { .. }
                | TensorError::AxisOutOfRange { .. }
                | TensorError::ShapeMismatch { .. }
        )
    }
}
