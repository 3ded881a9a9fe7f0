//! # Dot Product
//!
//! `dot(a, b) = Σ(a[i] * b[i])`
//!
//! Elements are unsigned integers of at most
//! [`MAX_SCALAR_BITS`](crate::config::MAX_SCALAR_BITS) bits held in `u64`.
//! Every product then fits in `u64` and the running sum is widened to `u128`,
//! so the result is exact for any vector length.

#[cfg(test)]
mod test;

/// Compute the exact dot product of two integer vectors.
///
/// # Panics
/// Panics if the vectors have different lengths.
///
/// # Example
/// ```
/// use dot_vectors::math::dot_product::dot_product_exact;
///
/// let a = [1, 2];
/// let b = [3, 0];
/// assert_eq!(dot_product_exact(&a, &b), 3);
/// ```
pub fn dot_product_exact(a: &[u64], b: &[u64]) -> u128 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| x as u128 * y as u128)
        .sum()
}
