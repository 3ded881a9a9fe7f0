//! # Dot-Vectors
//!
//! Random test vector generation for dot-product (multiply-accumulate) units.
//!
//! Each generated line holds two unsigned integer vectors and their exact dot
//! product:
//!
//! ```text
//! [12 0 255 7] [3 3 1 200] 1691
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod math;
pub mod random;
pub mod test_case;
pub mod tui;
pub mod verify;

pub use config::GeneratorConfig;
pub use error::{GenError, Result};
pub use generator::{generate_test_cases, GenerationSummary, VectorTestGenerator};
pub use test_case::{TestCase, TestVector};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::{GeneratorConfig, MAX_SCALAR_BITS};
    pub use crate::generator::{generate_test_cases, GenerationSummary, VectorTestGenerator};
    pub use crate::math::dot_product::dot_product_exact;
    pub use crate::random::Xoroshiro128PlusPlus;
    pub use crate::test_case::{TestCase, TestVector};
    pub use crate::verify::{verify_file, verify_reader};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn test_generated_cases_verify() {
        let config = GeneratorConfig {
            num_tests: 64,
            vec_len: 16,
            scalar_bits: 12,
        };
        let generator = VectorTestGenerator::new(config).unwrap();
        let mut rng = Xoroshiro128PlusPlus::seed_from_u64(0x5eed);

        let mut out = Vec::new();
        let summary = generator.generate_to_writer(&mut out, &mut rng).unwrap();
        assert_eq!(summary.lines_written, 64);

        match verify_reader(out.as_slice(), &config) {
            Ok(n) => assert_eq!(n, 64),
            Err(e) => panic!("generated output failed verification: {}", e),
        }
    }
}
