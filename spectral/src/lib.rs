//! Spectral analysis of sample point sets.
//!
//! This crate averages the Fourier magnitude spectra of a sequence of images,
//! lays result images side by side for comparison, and generates the
//! best-candidate blue-noise point sets those spectra are usually computed
//! from.

pub mod algo;
pub mod compose;
pub mod image_proc;
pub mod spectrum;

pub use compose::{compose_files, compose_row, plan_row, ComposeError, RowLayout, RowPlacement};
pub use spectrum::{DftAverageJob, SpectrumAverager, SpectrumError};

/// Install the `tracing` subscriber used by every binary in this crate.
///
/// Defaults to `info` level; `RUST_LOG` overrides it.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
