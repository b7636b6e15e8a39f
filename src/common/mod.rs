pub mod primality;
pub mod random;
