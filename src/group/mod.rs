pub mod generator;
pub mod order;
pub mod safe_prime;
