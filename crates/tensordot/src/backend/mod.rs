//! Backend abstraction for tensor operations.
//!
//! # Backends
//!
//! - `GenericBackend`: sequential strided loops (always correct, any layout)
//! - `RayonBackend`: the same loops, output rows distributed over rayon
//! - `GemmBackend`: permute to `[static, contracted]` / `[contracted, static]`,
//!   view as matrices and multiply with faer
//!
//! All contraction backends receive an already-validated
//! [`ContractionProperties`](crate::contract::ContractionProperties) and a
//! destination of the right shape; none of them can fail.
//!
//! # faer Integration
//!
//! The `faer_interop` module provides zero-copy row-major matrix views of
//! dense tensors.

mod contraction;
mod faer_interop;
mod gemm;
mod generic;
mod parallel;
mod strided;

pub use contraction::ContractionBackend;
pub use faer_interop::AsFaerMat;
pub use gemm::GemmBackend;
pub use generic::GenericBackend;
pub use parallel::RayonBackend;
