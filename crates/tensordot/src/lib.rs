//! tensordot - generalized tensor contraction over dense row-major tensors
//!
//! Given two tensors and a pairing of their axes, `contract` sums the
//! products of their elements over every paired axis and returns a tensor
//! whose axes are the first operand's unpaired axes followed by the
//! second's.
//!
//! # Architecture
//!
//! ```text
//! Level 1: High-level API (contract module)
//!     → contract, contract_with, contract_gemm
//!
//! Level 2: In-place API
//!     → contract_into, permutedims_into, outer_into
//!
//! Level 3: Backend implementation (backend module)
//!     → GenericBackend (sequential strided loops)
//!     → RayonBackend (parallel strided loops)
//!     → GemmBackend (faer matmul)
//! ```
//!
//! # Example
//!
//! ```
//! use tensordot::{DenseTensor, Tensor, contract};
//!
//! let a = Tensor::<f64>::arange(24).into_reshape(&[2, 3, 4]).unwrap();
//! let b: DenseTensor<f64> = Tensor::ones(&[4, 3, 2]);
//!
//! // Pair axis 1 of `a` with axis 1 of `b`, and axis 2 of `a` with axis 0 of `b`.
//! let c = contract(&a, &b, ([1, 2], [1, 0])).unwrap();
//! assert_eq!(c.shape(), &[2, 2]);
//! assert_eq!(c.get(&[1, 0]), Some(&210.0));
//!
//! // Integer form: last k axes of `a` against first k axes of `b`.
//! let m: DenseTensor<f64> = Tensor::ones(&[4, 5]);
//! let d = contract(&a, &m, 1).unwrap();
//! assert_eq!(d.shape(), &[2, 3, 5]);
//! ```

pub mod backend;
pub mod config;
pub mod contract;
pub mod error;
pub mod nested;
pub mod operations;
pub mod random;
pub mod scalar;
pub mod strides;
pub mod tensor;

pub use config::{Backend, ContractConfig};
pub use contract::{ContractAxes, contract, contract_into, contract_with};
pub use error::{Operand, TensorError};
pub use nested::Nested;
pub use random::RandomScalar;
pub use scalar::{Scalar, c64};
pub use tensor::{DenseTensor, Tensor};
