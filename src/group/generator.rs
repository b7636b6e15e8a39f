// Copyright © 2019 Binance
//
// This file is part of Binance. The full Binance copyright notice, including
// terms governing use, modification, and redistribution, is contained in the
// file LICENSE at the root of the source code distribution tree.

use log::debug;
use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, Rng};

use crate::common::random::get_random_int_in_range;
use crate::error::GroupError;
use crate::group::safe_prime::SafePrimePair;

impl SafePrimePair {
    /// Whether `x` lies in the quadratic-residue subgroup Q_p, i.e. has
    /// order 1 or q in Z_p*.
    pub fn is_quadratic_residue(&self, x: &BigUint) -> Result<bool, GroupError> {
        let order = self.order_of(x)?;
        Ok(order.is_one() || &order == self.prime())
    }

    /// Whether `g` generates Q_p, i.e. has order exactly q. The identity is
    /// a residue but not a generator.
    pub fn is_generator(&self, g: &BigUint) -> Result<bool, GroupError> {
        Ok(&self.order_of(g)? == self.prime())
    }

    /// Samples a generator of Q_p.
    ///
    /// Draws r uniform in [2, p - 1] and squares it mod p, so the candidate
    /// is a quadratic residue by construction and its order is 1 or q. Only
    /// the identity gets rejected, giving q / (q - 1) expected draws.
    pub fn find_generator<R: Rng + CryptoRng>(&self, rng: &mut R) -> BigUint {
        let p = self.safe_prime();
        let two = BigUint::from(2u32);
        loop {
            let r = get_random_int_in_range(rng, &two, p);
            let g = r.modpow(&two, p);
            if &self.order_unchecked(&g) == self.prime() {
                return g;
            }
            debug!("drew the identity residue, retrying generator search");
        }
    }
}

/// Whether `x` is a quadratic residue in Z_p* for a safe prime `p`.
pub fn is_quadratic_residue(x: &BigUint, p: &BigUint) -> Result<bool, GroupError> {
    SafePrimePair::from_safe_prime(p.clone())?.is_quadratic_residue(x)
}

/// Whether `g` generates the quadratic-residue subgroup Q_p.
pub fn is_quadratic_residue_generator(g: &BigUint, p: &BigUint) -> Result<bool, GroupError> {
    SafePrimePair::from_safe_prime(p.clone())?.is_generator(g)
}

/// Returns a generator of Q_p for a safe prime `p`.
pub fn gen_safe_prime_generator<R: Rng + CryptoRng>(
    rng: &mut R,
    p: &BigUint,
) -> Result<BigUint, GroupError> {
    Ok(SafePrimePair::from_safe_prime(p.clone())?.find_generator(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn test_residue_count_is_q() {
        // Exactly q of the 2q elements of Z_23* are squares.
        let pair = SafePrimePair::from_safe_prime(BigUint::from(23u32)).unwrap();
        let count = (1u32..23)
            .filter(|&x| pair.is_quadratic_residue(&BigUint::from(x)).unwrap())
            .count();
        assert_eq!(count, 11);
    }

    #[test]
    fn test_known_generators_mod_23() {
        let pair = SafePrimePair::from_safe_prime(BigUint::from(23u32)).unwrap();
        // 2 has order 11 = q; the identity is a residue but no generator;
        // 22 = -1 has order 2 and is neither.
        assert!(pair.is_generator(&BigUint::from(2u32)).unwrap());
        assert!(pair.is_quadratic_residue(&BigUint::from(1u32)).unwrap());
        assert!(!pair.is_generator(&BigUint::from(1u32)).unwrap());
        assert!(!pair.is_quadratic_residue(&BigUint::from(22u32)).unwrap());
        assert!(!pair.is_generator(&BigUint::from(22u32)).unwrap());
    }

    #[test]
    fn test_generator_mod_11() {
        // 3^5 = 1 (mod 11), so 3 generates Q_11.
        let pair = SafePrimePair::from_safe_prime(BigUint::from(11u32)).unwrap();
        assert!(pair.is_generator(&BigUint::from(3u32)).unwrap());
        assert!(pair.is_quadratic_residue(&BigUint::from(3u32)).unwrap());
    }

    #[test]
    fn test_found_generators_have_order_q() {
        let mut rng = thread_rng();
        let pair = SafePrimePair::from_safe_prime(BigUint::from(23u32)).unwrap();
        for _ in 0..10 {
            let g = pair.find_generator(&mut rng);
            assert_eq!(pair.order_of(&g).unwrap(), *pair.prime());
        }
    }

    #[test]
    fn test_end_to_end_generated_group() {
        let mut rng = thread_rng();
        let pair = SafePrimePair::generate(&mut rng, 12).unwrap();
        let g = pair.find_generator(&mut rng);
        assert!(!g.is_one());
        assert!(g.modpow(pair.prime(), pair.safe_prime()).is_one());
        assert!(pair.is_generator(&g).unwrap());
    }

    #[test]
    fn test_free_functions_validate_p() {
        let mut rng = thread_rng();
        let p = BigUint::from(23u32);
        let g = gen_safe_prime_generator(&mut rng, &p).unwrap();
        assert!(is_quadratic_residue_generator(&g, &p).unwrap());
        assert!(is_quadratic_residue(&g, &p).unwrap());

        let bad = BigUint::from(15u32);
        assert!(matches!(
            gen_safe_prime_generator(&mut rng, &bad),
            Err(GroupError::NotSafePrime(_))
        ));
        assert!(matches!(
            is_quadratic_residue(&BigUint::from(2u32), &bad),
            Err(GroupError::NotSafePrime(_))
        ));
    }
}
