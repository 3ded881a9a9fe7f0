//! Test vectors, test cases and the one-line text layout.
//!
//! A test case is written as
//!
//! ```text
//! [a0 a1 ... a(n-1)] [b0 b1 ... b(n-1)] dot_product
//! ```
//!
//! Elements are space-separated decimal integers inside square brackets, the
//! two vectors are separated by a single space and the dot product follows as
//! a plain decimal integer.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::math::dot_product::dot_product_exact;

/// An ordered sequence of non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestVector(Vec<u64>);

impl TestVector {
    /// Draw `len` independent values uniformly from `[0, max_val]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, len: usize, max_val: u64) -> Self {
        Self((0..len).map(|_| rng.random_range(0..=max_val)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Largest element, or `None` for an empty vector.
    pub fn max_element(&self) -> Option<u64> {
        self.0.iter().copied().max()
    }
}

impl From<Vec<u64>> for TestVector {
    fn from(values: Vec<u64>) -> Self {
        Self(values)
    }
}

impl fmt::Display for TestVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", v)?;
        }
        f.write_str("]")
    }
}

/// Two vectors and their dot product.
///
/// The dot product is always computed from `a` and `b` by the constructors,
/// so a `TestCase` never carries a sum that disagrees with its vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    a: TestVector,
    b: TestVector,
    dot_product: u128,
}

impl TestCase {
    /// Build a test case from two vectors of equal length.
    ///
    /// # Panics
    /// Panics if the vectors have different lengths.
    pub fn new(a: TestVector, b: TestVector) -> Self {
        let dot_product = dot_product_exact(a.as_slice(), b.as_slice());
        Self { a, b, dot_product }
    }

    /// Draw `a` then `b`, each of `len` values in `[0, max_val]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, len: usize, max_val: u64) -> Self {
        let a = TestVector::random(rng, len, max_val);
        let b = TestVector::random(rng, len, max_val);
        Self::new(a, b)
    }

    pub fn a(&self) -> &TestVector {
        &self.a
    }

    pub fn b(&self) -> &TestVector {
        &self.b
    }

    pub fn dot_product(&self) -> u128 {
        self.dot_product
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.b, self.dot_product)
    }
}

/// A line as read from disk, before the stated dot product is checked.
///
/// Parsing never recomputes anything: `stated_dot_product` is whatever the
/// line says, so callers can compare it against [`ParsedLine::expected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub a: TestVector,
    pub b: TestVector,
    pub stated_dot_product: u128,
}

impl ParsedLine {
    /// Dot product recomputed from the parsed vectors, `None` when their lengths differ.
    pub fn expected(&self) -> Option<u128> {
        if self.a.len() != self.b.len() {
            return None;
        }
        Some(dot_product_exact(self.a.as_slice(), self.b.as_slice()))
    }

    /// Convert into a [`TestCase`] if the stated dot product is correct.
    pub fn into_test_case(self) -> Result<TestCase, String> {
        match self.expected() {
            None => Err(format!(
                "vector lengths differ: {} vs {}",
                self.a.len(),
                self.b.len()
            )),
            Some(expected) if expected != self.stated_dot_product => Err(format!(
                "dot product is {}, line states {}",
                expected, self.stated_dot_product
            )),
            Some(_) => Ok(TestCase::new(self.a, self.b)),
        }
    }
}

/// Parse `[..]` at the start of `s`, returning the vector and the remainder.
fn parse_bracketed(s: &str) -> Result<(TestVector, &str), String> {
    let body = s
        .strip_prefix('[')
        .ok_or_else(|| format!("expected '[' at {:?}", s))?;
    let end = body
        .find(']')
        .ok_or_else(|| "missing closing ']'".to_string())?;

    let inner = &body[..end];
    let mut values = Vec::new();
    if !inner.is_empty() {
        for token in inner.split(' ') {
            if token.is_empty() || !token.bytes().all(|c| c.is_ascii_digit()) {
                return Err(format!("invalid element {:?}", token));
            }
            let value = token
                .parse::<u64>()
                .map_err(|_| format!("invalid element {:?}", token))?;
            values.push(value);
        }
    }

    Ok((TestVector(values), &body[end + 1..]))
}

impl FromStr for ParsedLine {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.strip_suffix('\n').unwrap_or(line);

        let (a, rest) = parse_bracketed(line)?;
        let rest = rest
            .strip_prefix(' ')
            .ok_or_else(|| "expected a single space after the first vector".to_string())?;
        let (b, rest) = parse_bracketed(rest)?;
        let rest = rest
            .strip_prefix(' ')
            .ok_or_else(|| "expected a single space before the dot product".to_string())?;

        if rest.is_empty() || !rest.bytes().all(|c| c.is_ascii_digit()) {
            return Err(format!("invalid dot product {:?}", rest));
        }
        let stated_dot_product = rest
            .parse::<u128>()
            .map_err(|e| format!("invalid dot product {:?}: {}", rest, e))?;

        Ok(ParsedLine {
            a,
            b,
            stated_dot_product,
        })
    }
}

impl FromStr for TestCase {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        line.parse::<ParsedLine>()?.into_test_case()
    }
}
