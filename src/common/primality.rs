// Copyright © 2019 Binance
//
// This file is part of Binance. The full Binance copyright notice, including
// terms governing use, modification, and redistribution, is contained in the
// file LICENSE at the root of the source code distribution tree.

use num_bigint::BigUint;
use num_integer::Integer;
use num_prime::{nt_funcs, PrimalityTestConfig};
use num_traits::{One, ToPrimitive};
use once_cell::sync::Lazy;

// Small primes for trial division (their product still fits in a u64).
static SMALL_PRIMES: [u64; 15] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53,
];

// Lazily initialized product of SMALL_PRIMES.
static SMALL_PRIMES_PRODUCT: Lazy<BigUint> = Lazy::new(|| {
    SMALL_PRIMES
        .iter()
        .fold(BigUint::one(), |acc, &p| acc * p)
});

/// Returns whether `n` is probably prime.
///
/// Cheap composites are rejected by trial division against `SMALL_PRIMES`;
/// survivors go through the strict probabilistic test of `num_prime`
/// (Miller-Rabin with random witnesses plus a Lucas test), so the
/// false-positive probability is negligible for cryptographic use.
pub fn is_probable_prime(n: &BigUint) -> bool {
    if let Some(small) = n.to_u64() {
        if small < 2 {
            return false;
        }
        if small == 2 {
            return true;
        }
        if small <= 53 {
            return SMALL_PRIMES.contains(&small);
        }
    }
    if n.is_even() {
        return false;
    }
    if has_small_prime_factor(n) {
        return false;
    }
    nt_funcs::is_prime(n, Some(PrimalityTestConfig::strict())).probably()
}

/// Trial division of `n` against all of `SMALL_PRIMES` via a single
/// big-integer reduction. Only valid for n > 53.
fn has_small_prime_factor(n: &BigUint) -> bool {
    match (n % &*SMALL_PRIMES_PRODUCT).to_u64() {
        Some(0) => true,
        Some(rem) => SMALL_PRIMES.iter().any(|&p| rem % p == 0),
        // The product fits in a u64, so the remainder always does too.
        None => false,
    }
}
