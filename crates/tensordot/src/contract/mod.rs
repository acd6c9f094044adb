//! Tensor contraction (`tensordot`).
//!
//! Sums products of two dense tensors over paired axes. The axes to pair
//! are given as a [`ContractAxes`]: either explicit lists or a count `k`
//! meaning "last `k` of the first against first `k` of the second".
//!
//! The result shape is the first operand's uncontracted axis lengths
//! followed by the second's, each in original order.
//!
//! # Implementations
//!
//! - [`contract`] / [`contract_with`]: validate, allocate, dispatch to a backend
//! - [`contract_into`]: same, into a caller-provided destination
//! - [`contract_gemm`]: always use the faer GEMM backend
//!
//! # Example
//!
//! ```
//! use tensordot::{Tensor, contract};
//!
//! // Matrix multiplication: C[i,k] = A[i,j] * B[j,k]
//! let a = Tensor::<f64>::ones(&[2, 3]);
//! let b = Tensor::<f64>::ones(&[3, 4]);
//!
//! let c = contract(&a, &b, 1).unwrap();
//! assert_eq!(c.shape(), &[2, 4]);
//! assert_eq!(c.get(&[0, 0]), Some(&3.0));
//! ```

mod axes;
mod dense;
mod properties;

pub use axes::ContractAxes;
pub use dense::{contract, contract_gemm, contract_into, contract_with};
pub use properties::ContractionProperties;
