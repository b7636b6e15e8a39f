use num_bigint::BigUint;
use thiserror::Error;

/// Errors reported by the group parameter generators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    #[error("bit length must be at least {min_bits} bits, got {got_bits}")]
    BitLengthTooSmall { min_bits: usize, got_bits: usize },

    #[error("{0} is not a safe prime")]
    NotSafePrime(BigUint),

    #[error("element {element} is outside the group range [1, {modulus} - 1]")]
    ElementOutOfRange { element: BigUint, modulus: BigUint },
}
