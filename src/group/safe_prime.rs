// Copyright © 2019 Binance
//
// This file is part of Binance. The full Binance copyright notice, including
// terms governing use, modification, and redistribution, is contained in the
// file LICENSE at the root of the source code distribution tree.

use log::debug;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::{CryptoRng, Rng};

use crate::common::primality::is_probable_prime;
use crate::common::random::get_random_bit_sized_int;
use crate::error::GroupError;

const MIN_PRIME_BITS: usize = 2;
// q = (p - 1) / 2 needs at least 2 bits of its own.
const MIN_SAFE_PRIME_BITS: usize = 3;

/// A Sophie Germain pair (q, p) where p = 2q + 1 and both are probably prime.
///
/// Constructed only through [`SafePrimePair::generate`] or
/// [`SafePrimePair::from_safe_prime`], so holders can rely on the safe-prime
/// structure without re-checking it on every group operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SafePrimePair {
    q: BigUint,
    p: BigUint,
}

impl SafePrimePair {
    /// Samples a fresh pair whose safe prime `p` has exactly `bits` bits.
    ///
    /// Rejection sampling over q: safe primes are rare, so the expected
    /// number of candidate pairs grows with `bits`, but each retry is
    /// independent and the failure probability shrinks geometrically.
    pub fn generate<R: Rng + CryptoRng>(rng: &mut R, bits: usize) -> Result<Self, GroupError> {
        if bits < MIN_SAFE_PRIME_BITS {
            return Err(GroupError::BitLengthTooSmall {
                min_bits: MIN_SAFE_PRIME_BITS,
                got_bits: bits,
            });
        }
        let mut attempts = 0u64;
        loop {
            attempts += 1;
            let q = gen_prime(rng, bits - 1)?;
            // If q = 1 (mod 3) then 3 divides 2q + 1; skip the candidate
            // before the expensive primality test on p.
            if (&q % 3u32).is_one() {
                continue;
            }
            let p = &q * 2u32 + 1u32;
            if is_probable_prime(&p) {
                debug!(
                    "found {}-bit safe prime after {} candidate pairs",
                    bits, attempts
                );
                return Ok(SafePrimePair { q, p });
            }
        }
    }

    /// Wraps an externally supplied safe prime after verifying its structure.
    ///
    /// Accepts `p` iff it is odd, at least 5, and both `p` and (p - 1) / 2
    /// pass the primality oracle.
    pub fn from_safe_prime(p: BigUint) -> Result<Self, GroupError> {
        if p < BigUint::from(5u32) || p.is_even() {
            return Err(GroupError::NotSafePrime(p));
        }
        let q = (&p - 1u32) / 2u32;
        if !is_probable_prime(&q) || !is_probable_prime(&p) {
            return Err(GroupError::NotSafePrime(p));
        }
        Ok(SafePrimePair { q, p })
    }

    /// Returns the Sophie Germain prime `q`, the order of the
    /// quadratic-residue subgroup.
    pub fn prime(&self) -> &BigUint {
        &self.q
    }

    /// Returns the safe prime `p = 2q + 1`, the group modulus.
    pub fn safe_prime(&self) -> &BigUint {
        &self.p
    }

    /// Re-checks that both halves are probably prime and that p = 2q + 1.
    pub fn validate(&self) -> bool {
        is_probable_prime(&self.q)
            && is_probable_prime(&self.p)
            && self.p == &self.q * 2u32 + 1u32
    }

    /// Consumes the pair, returning `(q, p)`.
    pub fn into_parts(self) -> (BigUint, BigUint) {
        (self.q, self.p)
    }
}

/// Returns a probable prime with exactly `bits` bits.
///
/// Rejection sampling: uniform draws from [2^(bits-1), 2^bits) until the
/// primality oracle accepts one. A draw succeeds with probability roughly
/// 1 / (bits * ln 2), so the loop terminates quickly in expectation and no
/// retry cap is imposed.
pub fn gen_prime<R: Rng + CryptoRng>(rng: &mut R, bits: usize) -> Result<BigUint, GroupError> {
    if bits < MIN_PRIME_BITS {
        return Err(GroupError::BitLengthTooSmall {
            min_bits: MIN_PRIME_BITS,
            got_bits: bits,
        });
    }
    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let candidate = get_random_bit_sized_int(rng, bits);
        if is_probable_prime(&candidate) {
            debug!("found {}-bit prime after {} candidates", bits, attempts);
            return Ok(candidate);
        }
    }
}

/// Returns a safe prime p = 2q + 1 with exactly `bits` bits.
pub fn gen_safe_prime<R: Rng + CryptoRng>(rng: &mut R, bits: usize) -> Result<BigUint, GroupError> {
    Ok(SafePrimePair::generate(rng, bits)?.p)
}
