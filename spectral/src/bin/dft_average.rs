//! Averaged DFT magnitude spectrum of a numbered image sequence.
//!
//! Reads `<base_file_name>0.png` through `<base_file_name>{N-1}.png`, averages
//! their centered magnitude spectra (DC removed), normalizes the average to
//! the full 8-bit range and writes it as a grayscale image.
//!
//! Usage: `dft_average <base_file_name> <file_count> <out_file_name>`

use anyhow::{Context, Result};
use clap::Parser;
use spectral::DftAverageJob;
use std::path::PathBuf;

/// Parse a strictly positive image count
fn parse_file_count(s: &str) -> Result<usize, String> {
    let count = s
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("'{s}' is not a non-negative integer"))?;
    if count == 0 {
        return Err("file count must be at least 1".to_string());
    }
    Ok(count)
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Average the DFT magnitude spectra of a numbered image sequence"
)]
struct Args {
    /// Prefix of the input files; file i is read from <BASE_FILE_NAME><i>.png
    base_file_name: String,

    /// Number of input files
    #[arg(value_parser = parse_file_count)]
    file_count: usize,

    /// Output image path; the format follows the extension
    out_file_name: PathBuf,
}

fn main() -> Result<()> {
    spectral::init_tracing();

    let args = Args::parse();

    let job = DftAverageJob::new(args.base_file_name, args.file_count, args.out_file_name);
    job.run().with_context(|| {
        format!(
            "Failed to average {} spectra into {}",
            job.file_count,
            job.output.display()
        )
    })?;

    Ok(())
}
