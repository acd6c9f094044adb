//! Reproducible random operands.
//!
//! There is no thread-local shortcut: every constructor takes the caller's
//! RNG, so a fixed seed always yields the same tensor.

use rand::Rng;
use rand::distr::StandardUniform;
use rand_distr::StandardNormal;

use crate::scalar::{Scalar, c64};
use crate::tensor::Tensor;

/// Element types that can be drawn from an RNG.
pub trait RandomScalar: Scalar {
    /// Uniform on `[0, 1)`; complex values draw both parts independently.
    fn draw_uniform<R: Rng>(rng: &mut R) -> Self;

    /// Unit-variance normal. For complex values `E|z|^2 == 1`.
    fn draw_normal<R: Rng>(rng: &mut R) -> Self;
}

impl RandomScalar for f64 {
    fn draw_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }

    fn draw_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl RandomScalar for c64 {
    fn draw_uniform<R: Rng>(rng: &mut R) -> Self {
        let re = f64::draw_uniform(rng);
        c64::new(re, f64::draw_uniform(rng))
    }

    fn draw_normal<R: Rng>(rng: &mut R) -> Self {
        // each part carries half the variance
        let re = f64::draw_normal(rng) * std::f64::consts::FRAC_1_SQRT_2;
        let im = f64::draw_normal(rng) * std::f64::consts::FRAC_1_SQRT_2;
        c64::new(re, im)
    }
}

impl<ElT: RandomScalar> Tensor<ElT> {
    /// Tensor of uniform `[0, 1)` samples, filled in row-major order.
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use tensordot::Tensor;
    ///
    /// let a: Tensor<f64> = Tensor::random_with_rng(&[2, 3], &mut StdRng::seed_from_u64(7));
    /// let b: Tensor<f64> = Tensor::random_with_rng(&[2, 3], &mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn random_with_rng<R: Rng>(shape: &[usize], rng: &mut R) -> Self {
        Self::from_fn(shape, || ElT::draw_uniform(rng))
    }

    /// Tensor of unit-variance normal samples, filled in row-major order.
    pub fn randn_with_rng<R: Rng>(shape: &[usize], rng: &mut R) -> Self {
        Self::from_fn(shape, || ElT::draw_normal(rng))
    }
}
