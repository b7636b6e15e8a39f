//! Group parameter generation for discrete-log based voting protocols.
//!
//! Produces safe primes p = 2q + 1 and generators of the order-q
//! quadratic-residue subgroup of Z_p*. The resulting (p, q, g) tuples
//! parameterize the encryption, commitment and proof schemes built on top.

pub mod common;
pub mod error;
pub mod group;

pub use common::primality::is_probable_prime;
pub use error::GroupError;
pub use group::generator::{
    gen_safe_prime_generator, is_quadratic_residue, is_quadratic_residue_generator,
};
pub use group::order::get_order_in_safe_prime;
pub use group::safe_prime::{gen_prime, gen_safe_prime, SafePrimePair};
