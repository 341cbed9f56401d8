// src/core/error.rs

use num::BigInt;
use thiserror::Error;

/// Invalid-argument failures surfaced by the fallible operations.
///
/// Every variant is raised before the corresponding loop runs, so a bad
/// argument can never hang a computation or produce a silently wrong value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Binary exponentiation only terminates for non-negative exponents.
    #[error("exponent must be non-negative, but was {exponent}")]
    NegativeExponent {
        /// The rejected exponent.
        exponent: BigInt,
    },
    /// Reduction modulo a non-positive value is not meaningful.
    #[error("modulus must be positive, but was {modulus}")]
    NonPositiveModulus {
        /// The rejected modulus.
        modulus: BigInt,
    },
    /// A Monte Carlo estimate over zero samples is a division by zero.
    #[error("sample count must be positive")]
    ZeroSampleCount,
}
