//! Scalar trait for tensor element types.

use faer_traits::ComplexField;
use std::fmt::Debug;
use std::ops::{Add, Mul};

pub use faer::c64;

/// Trait for scalar types supported by tensordot.
///
/// This wraps faer's `ComplexField` (needed by the GEMM backend) with the
/// arithmetic and thread-safety bounds the contraction kernels rely on.
pub trait Scalar:
    ComplexField
    + Copy
    + Debug
    + Default
    + Send
    + Sync
    + Add<Output = Self>
    + Mul<Output = Self>
    + 'static
{
    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Embed a real number.
    fn from_f64(x: f64) -> Self;

    /// Squared magnitude `|x|^2`.
    fn squared_magnitude(self) -> f64;
}

impl Scalar for f64 {
    fn one() -> Self {
        1.0
    }

    fn from_f64(x: f64) -> Self {
        x
    }

    fn squared_magnitude(self) -> f64 {
        self * self
    }
}

impl Scalar for c64 {
    fn one() -> Self {
        c64::new(1.0, 0.0)
    }

    fn from_f64(x: f64) -> Self {
        c64::new(x, 0.0)
    }

    fn squared_magnitude(self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}
