//! Tensor operations.
//!
//! High-level functions allocate their output and call the in-place
//! version, which dispatches to a backend:
//!
//! ```text
//! permutedims(tensor, perm)
//!     → validate, allocate
//!     → permutedims_into(dest, tensor, perm) → backend
//! ```

mod norm;
mod outer;
mod permutedims;
mod vecdot;

pub use norm::{norm, norm_sqr};
pub use outer::{outer, outer_into};
pub use permutedims::{permutedims, permutedims_into, validate_permutation};
pub use vecdot::vecdot;
