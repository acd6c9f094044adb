//! Contraction configuration.
//!
//! Backend choice can be fixed per call through [`ContractConfig`] or taken
//! from the environment:
//!
//! - `TENSORDOT_BACKEND`: one of `auto`, `generic`, `rayon`, `gemm`
//! - `TENSORDOT_WORK_THRESHOLD`: minimum multiply-add count before
//!   `auto` switches away from the sequential kernel
//!
//! [`contract`](crate::contract::contract) reads both once, on its first
//! call, through [`ContractConfig::global`]. `contract_with` and
//! `contract_into` use exactly the configuration they are given. Unparseable
//! values are logged and ignored.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::contract::ContractionProperties;

/// Environment variable selecting the contraction backend.
pub const BACKEND_ENV: &str = "TENSORDOT_BACKEND";

/// Environment variable overriding [`ContractConfig::work_threshold`].
pub const WORK_THRESHOLD_ENV: &str = "TENSORDOT_WORK_THRESHOLD";

/// Default work size (multiply-adds) above which `Backend::Auto` leaves the
/// sequential kernel.
pub const DEFAULT_WORK_THRESHOLD: usize = 1 << 14;

/// Contraction kernel selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Pick per call from the contraction size.
    #[default]
    Auto,
    /// Sequential strided loops.
    Generic,
    /// Strided loops, output rows split across the rayon pool.
    Rayon,
    /// Permute, reshape to matrices, multiply with faer.
    Gemm,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Auto => "auto",
            Backend::Generic => "generic",
            Backend::Rayon => "rayon",
            Backend::Gemm => "gemm",
        };
        f.write_str(name)
    }
}

/// Error returned when a backend name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown backend {0:?}, expected one of auto, generic, rayon, gemm")]
pub struct ParseBackendError(String);

impl FromStr for Backend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Backend::Auto),
            "generic" | "naive" => Ok(Backend::Generic),
            "rayon" | "parallel" => Ok(Backend::Rayon),
            "gemm" | "faer" => Ok(Backend::Gemm),
            _ => Err(ParseBackendError(s.to_string())),
        }
    }
}

/// Options for a single contraction.
///
/// # Example
///
/// ```
/// use tensordot::{Backend, ContractConfig};
///
/// let config = ContractConfig::default().with_backend(Backend::Gemm);
/// assert_eq!(config.backend, Backend::Gemm);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractConfig {
    pub backend: Backend,
    /// Work size (multiply-adds) at which `Backend::Auto` stops using the
    /// sequential kernel.
    pub work_threshold: usize,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Auto,
            work_threshold: DEFAULT_WORK_THRESHOLD,
        }
    }
}

impl ContractConfig {
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_work_threshold(mut self, threshold: usize) -> Self {
        self.work_threshold = threshold;
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Process-wide configuration, read from the environment on first use.
    pub fn global() -> &'static ContractConfig {
        static GLOBAL: OnceLock<ContractConfig> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let config = Self::from_env();
            tracing::debug!(
                backend = %config.backend,
                work_threshold = config.work_threshold,
                "contraction config"
            );
            config
        })
    }

    /// Build configuration from an arbitrary key lookup, falling back to
    /// defaults for missing or malformed values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(BACKEND_ENV) {
            match raw.parse::<Backend>() {
                Ok(backend) => config.backend = backend,
                Err(err) => tracing::warn!(%err, "ignoring {BACKEND_ENV}"),
            }
        }

        if let Some(raw) = lookup(WORK_THRESHOLD_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(threshold) => config.work_threshold = threshold,
                Err(err) => tracing::warn!(%err, value = %raw, "ignoring {WORK_THRESHOLD_ENV}"),
            }
        }

        config
    }

    /// Resolve `Backend::Auto` to a concrete backend for one contraction.
    ///
    /// Small contractions stay on the generic kernel. Larger ones go to
    /// GEMM when there is a real inner dimension to multiply over, and to
    /// the parallel strided kernel otherwise (outer products).
    pub fn select(&self, props: &ContractionProperties) -> Backend {
        match self.backend {
            Backend::Auto => {
                if props.work() < self.work_threshold {
                    Backend::Generic
                } else if props.dmid > 1 {
                    Backend::Gemm
                } else {
                    Backend::Rayon
                }
            }
            explicit => explicit,
        }
    }
}
