//! Random sources for test-case generation.
//!
//! The generator accepts any [`rand::Rng`]. [`Xoroshiro128PlusPlus`] is the
//! seeded source used by the CLI so that every file can be regenerated from
//! the seed it was logged with.

pub mod xoroshiro;

pub use xoroshiro::Xoroshiro128PlusPlus;
