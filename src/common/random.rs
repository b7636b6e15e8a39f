use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, Rng};

const GET_RANDOM_INT_MAX_BITS: usize = 5000;

/// Draws a uniformly random integer with exactly `bits` bits,
/// i.e. in [2^(bits-1), 2^bits).
pub fn get_random_bit_sized_int<R: Rng + CryptoRng>(rng: &mut R, bits: usize) -> BigUint {
    if bits == 0 || bits > GET_RANDOM_INT_MAX_BITS {
        panic!(
            "get_random_bit_sized_int: bits must be in 1..={}, got {}",
            GET_RANDOM_INT_MAX_BITS, bits
        );
    }
    let lower = BigUint::one() << (bits - 1);
    let upper = BigUint::one() << bits;
    rng.gen_biguint_range(&lower, &upper)
}

/// Draws a uniformly random integer in [lower, upper).
/// Requires lower < upper.
pub fn get_random_int_in_range<R: Rng + CryptoRng>(
    rng: &mut R,
    lower: &BigUint,
    upper: &BigUint,
) -> BigUint {
    rng.gen_biguint_range(lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn test_bit_sized_int_has_exact_bit_length() {
        let mut rng = thread_rng();
        for _ in 0..50 {
            let x = get_random_bit_sized_int(&mut rng, 64);
            assert_eq!(x.bits(), 64);
        }
        assert_eq!(get_random_bit_sized_int(&mut rng, 1), BigUint::one());
    }

    #[test]
    fn test_range_draw_stays_in_range() {
        let mut rng = thread_rng();
        let lower = BigUint::from(10u32);
        let upper = BigUint::from(100u32);
        for _ in 0..100 {
            let x = get_random_int_in_range(&mut rng, &lower, &upper);
            assert!(x >= lower && x < upper);
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_bits_panics() {
        let mut rng = thread_rng();
        get_random_bit_sized_int(&mut rng, 0);
    }
}
