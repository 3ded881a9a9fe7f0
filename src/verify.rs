//! Read a generated file back and check every line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::test_case::ParsedLine;

/// Verify the file at `path` against `config`.
///
/// Returns the number of verified lines. Fails on the first bad line, or if
/// the file does not hold exactly `config.num_tests` lines.
pub fn verify_file<P: AsRef<Path>>(path: P, config: &GeneratorConfig) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| GenError::io(path, e))?;

    let count = verify_lines(BufReader::new(file), config, |e| GenError::io(path, e))?;
    info!("Verified {} test cases in {}", count, path.display());
    Ok(count)
}

/// Verify test cases read from any buffered reader.
pub fn verify_reader<R: BufRead>(reader: R, config: &GeneratorConfig) -> Result<usize> {
    verify_lines(reader, config, |e| GenError::io("<reader>", e))
}

fn verify_lines<R, F>(mut reader: R, config: &GeneratorConfig, io_err: F) -> Result<usize>
where
    R: BufRead,
    F: Fn(std::io::Error) -> GenError,
{
    config.validate()?;
    let max_val = config.max_value();
    let mut count = 0;
    let mut buf = String::new();

    loop {
        buf.clear();
        if reader.read_line(&mut buf).map_err(&io_err)? == 0 {
            break;
        }
        let line_no = count + 1;

        let line = buf.strip_suffix('\n').ok_or_else(|| GenError::Parse {
            line: line_no,
            reason: "missing trailing newline".to_string(),
        })?;
        if line.ends_with('\r') {
            return Err(GenError::Parse {
                line: line_no,
                reason: "carriage return before newline".to_string(),
            });
        }

        let parsed: ParsedLine = line.parse().map_err(|reason| GenError::Parse {
            line: line_no,
            reason,
        })?;
        check_line(&parsed, config.vec_len, max_val).map_err(|reason| GenError::Mismatch {
            line: line_no,
            reason,
        })?;

        debug!("line {} ok", line_no);
        count += 1;
    }

    if count != config.num_tests {
        return Err(GenError::LineCount {
            expected: config.num_tests,
            found: count,
        });
    }

    Ok(count)
}

fn check_line(
    parsed: &ParsedLine,
    vec_len: usize,
    max_val: u64,
) -> std::result::Result<(), String> {
    for (name, v) in [("a", &parsed.a), ("b", &parsed.b)] {
        if v.len() != vec_len {
            return Err(format!(
                "vector {} has length {}, expected {}",
                name,
                v.len(),
                vec_len
            ));
        }
        if let Some(m) = v.max_element().filter(|&m| m > max_val) {
            return Err(format!(
                "vector {} holds {} which exceeds the maximum {}",
                name, m, max_val
            ));
        }
    }

    match parsed.expected() {
        Some(d) if d == parsed.stated_dot_product => Ok(()),
        Some(d) => Err(format!(
            "dot product is {}, line states {}",
            d, parsed.stated_dot_product
        )),
        None => Err("vector lengths differ".to_string()),
    }
}
