//! Test file generation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, trace};
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::test_case::TestCase;

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Destination file, `None` when writing to an arbitrary writer.
    pub path: Option<PathBuf>,
    pub config: GeneratorConfig,
    pub lines_written: usize,
    /// Largest dot product written, `None` when no lines were written.
    pub max_dot_product: Option<u128>,
}

/// Writes `num_tests` random test cases, one per line.
#[derive(Debug, Clone)]
pub struct VectorTestGenerator {
    config: GeneratorConfig,
}

impl VectorTestGenerator {
    /// Create a generator after validating `config`.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a fresh test case.
    pub fn next_case<R: Rng + ?Sized>(&self, rng: &mut R) -> TestCase {
        TestCase::random(rng, self.config.vec_len, self.config.max_value())
    }

    /// Create (or truncate) `path` and write all test cases to it.
    ///
    /// A failure partway through leaves the lines written so far on disk.
    pub fn generate<P, R>(&self, path: P, rng: &mut R) -> Result<GenerationSummary>
    where
        P: AsRef<Path>,
        R: Rng + ?Sized,
    {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| GenError::io(path, e))?;

        let mut summary = self
            .write_cases(BufWriter::new(file), rng)
            .map_err(|e| GenError::io(path, e))?;
        summary.path = Some(path.to_path_buf());

        info!(
            "Wrote {} test cases to {} (vec_len={}, scalar_bits={})",
            summary.lines_written,
            path.display(),
            self.config.vec_len,
            self.config.scalar_bits
        );
        Ok(summary)
    }

    /// Write all test cases to `writer`.
    pub fn generate_to_writer<W, R>(&self, writer: W, rng: &mut R) -> Result<GenerationSummary>
    where
        W: Write,
        R: Rng + ?Sized,
    {
        self.write_cases(writer, rng)
            .map_err(|e| GenError::io("<writer>", e))
    }

    fn write_cases<W, R>(&self, mut writer: W, rng: &mut R) -> std::io::Result<GenerationSummary>
    where
        W: Write,
        R: Rng + ?Sized,
    {
        let mut max_dot_product = None;

        for i in 0..self.config.num_tests {
            let case = self.next_case(rng);
            trace!("case {}: {}", i, case);

            max_dot_product = max_dot_product.max(Some(case.dot_product()));
            writeln!(writer, "{}", case)?;
        }
        writer.flush()?;

        debug!(
            "Generated {} cases, largest dot product {:?}",
            self.config.num_tests, max_dot_product
        );

        Ok(GenerationSummary {
            path: None,
            config: self.config,
            lines_written: self.config.num_tests,
            max_dot_product,
        })
    }
}

/// Validate `config` and write its test cases to `path`.
///
/// # Example
/// ```no_run
/// use dot_vectors::{generate_test_cases, GeneratorConfig};
///
/// let config = GeneratorConfig { num_tests: 20, vec_len: 8, scalar_bits: 8 };
/// generate_test_cases("test_vectors_dot_product_8bit.txt", &config, &mut rand::rng())?;
/// # Ok::<(), dot_vectors::GenError>(())
/// ```
pub fn generate_test_cases<P, R>(
    path: P,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GenerationSummary>
where
    P: AsRef<Path>,
    R: Rng + ?Sized,
{
    VectorTestGenerator::new(*config)?.generate(path, rng)
}
