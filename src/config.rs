//! Generator configuration.

use crate::error::{GenError, Result};

/// Widest element supported.
///
/// Elements are held as `u64` and the dot product as `u128`. At 32 bits every
/// product is below `2^64`, so a sum over any `usize` number of terms stays
/// below `2^128`.
pub const MAX_SCALAR_BITS: u32 = 32;

/// Parameters for one generated test file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of test-case lines to write. `0` yields an empty file.
    pub num_tests: usize,
    /// Length of both vectors on each line. `0` yields `[] [] 0` lines.
    pub vec_len: usize,
    /// Bit width of every element; values are drawn from `[0, 2^scalar_bits - 1]`.
    pub scalar_bits: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_tests: 10,
            vec_len: 4,
            scalar_bits: 8,
        }
    }
}

impl GeneratorConfig {
    /// Check that the bit width is within `1..=MAX_SCALAR_BITS`.
    pub fn validate(&self) -> Result<()> {
        if self.scalar_bits == 0 {
            return Err(GenError::InvalidConfig {
                reason: "scalar_bits must be at least 1".to_string(),
            });
        }
        if self.scalar_bits > MAX_SCALAR_BITS {
            return Err(GenError::InvalidConfig {
                reason: format!(
                    "scalar_bits = {} exceeds the supported maximum of {}",
                    self.scalar_bits, MAX_SCALAR_BITS
                ),
            });
        }
        Ok(())
    }

    /// Largest element value, `2^scalar_bits - 1`.
    pub fn max_value(&self) -> u64 {
        (1u64 << self.scalar_bits) - 1
    }

    /// Upper bound of any dot product under this config.
    pub fn max_dot_product(&self) -> u128 {
        let m = self.max_value() as u128;
        m * m * self.vec_len as u128
    }

    /// File name used when none is given, e.g. `test_vectors_dot_product_8bit.txt`.
    pub fn default_file_name(&self) -> String {
        format!("test_vectors_dot_product_{}bit.txt", self.scalar_bits)
    }
}
