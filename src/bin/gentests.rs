//! Command line front end for the test vector generator.
//!
//! Usage:
//!   gentests                          # 20 cases, length 8, 8-bit elements
//!                                     # -> test_vectors_dot_product_8bit.txt
//!   gentests -n 100 -l 16 -b 12       # custom shape
//!   gentests --seed 12345 --verify    # reproducible run, read back afterwards

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dot_vectors::random::Xoroshiro128PlusPlus;
use dot_vectors::{tui, verify, GeneratorConfig, VectorTestGenerator};
use log::info;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(version, about = "Generate random dot-product test vectors", long_about = None)]
struct Args {
    /// Output file (default: test_vectors_dot_product_<bits>bit.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of test cases to write
    #[arg(short, long, default_value_t = 20)]
    num_tests: usize,

    /// Length of each vector
    #[arg(short = 'l', long, default_value_t = 8)]
    vec_len: usize,

    /// Bit width of each element
    #[arg(short = 'b', long, default_value_t = 8)]
    scalar_bits: u32,

    /// Random seed for a reproducible file (default: random, logged)
    #[arg(long)]
    seed: Option<u64>,

    /// Read the file back and check every line after writing
    #[arg(long)]
    verify: bool,

    /// Do not print the summary box
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            num_tests: self.num_tests,
            vec_len: self.vec_len,
            scalar_bits: self.scalar_bits,
        }
    }
}

/// `--output` if given, otherwise the file name derived from the bit width.
fn output_path(output: Option<PathBuf>, config: &GeneratorConfig) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(config.default_file_name()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();
    let output = output_path(args.output, &config);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Using seed {}", seed);
    let mut rng = Xoroshiro128PlusPlus::seed_from_u64(seed);

    let generator = VectorTestGenerator::new(config).context("invalid arguments")?;
    let summary = generator
        .generate(&output, &mut rng)
        .with_context(|| format!("failed to generate {}", output.display()))?;

    if args.verify {
        verify::verify_file(&output, &config)
            .with_context(|| format!("verification of {} failed", output.display()))?;
    }

    if !args.quiet {
        tui::print_header();
        tui::print_summary(&summary, Some(seed));
    }

    Ok(())
}
