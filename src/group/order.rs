// Copyright © 2019 Binance
//
// This file is part of Binance. The full Binance copyright notice, including
// terms governing use, modification, and redistribution, is contained in the
// file LICENSE at the root of the source code distribution tree.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::GroupError;
use crate::group::safe_prime::SafePrimePair;

impl SafePrimePair {
    /// Returns the multiplicative order of `x` in Z_p*.
    ///
    /// Z_p* has order p - 1 = 2q with q prime, so by Lagrange's theorem the
    /// only possible element orders are 1, 2, q and 2q. The three cheap
    /// checks below cover the first three; whatever survives must have
    /// order 2q.
    ///
    /// Fails with [`GroupError::ElementOutOfRange`] unless x is in [1, p - 1].
    pub fn order_of(&self, x: &BigUint) -> Result<BigUint, GroupError> {
        self.check_element(x)?;
        Ok(self.order_unchecked(x))
    }

    /// Order computation without the range check. Caller guarantees
    /// x in [1, p - 1].
    pub(crate) fn order_unchecked(&self, x: &BigUint) -> BigUint {
        let p = self.safe_prime();
        let q = self.prime();
        if x.is_one() {
            return BigUint::one();
        }
        let two = BigUint::from(2u32);
        if x.modpow(&two, p).is_one() {
            return two;
        }
        if x.modpow(q, p).is_one() {
            return q.clone();
        }
        q * 2u32
    }

    pub(crate) fn check_element(&self, x: &BigUint) -> Result<(), GroupError> {
        if x.is_zero() || x >= self.safe_prime() {
            return Err(GroupError::ElementOutOfRange {
                element: x.clone(),
                modulus: self.safe_prime().clone(),
            });
        }
        Ok(())
    }
}

/// Returns the order of `x` in Z_p* for a safe prime `p`.
///
/// `p` is revalidated on every call and a non-safe prime is rejected with
/// [`GroupError::NotSafePrime`]; use [`SafePrimePair::order_of`] when the
/// same group is queried repeatedly.
pub fn get_order_in_safe_prime(x: &BigUint, p: &BigUint) -> Result<BigUint, GroupError> {
    SafePrimePair::from_safe_prime(p.clone())?.order_of(x)
}
