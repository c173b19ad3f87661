//! Compose images side by side into a single row.
//!
//! With no arguments this lays out the averaged Mitchell and Euler spectra
//! (`out/_MBC.png`, `out/_EBC.png`) with a 15 pixel gap and writes `BC.png`.

use anyhow::{Context, Result};
use clap::Parser;
use spectral::{compose_files, RowLayout};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Lay out images left to right with padding")]
struct Args {
    #[arg(
        short = 'i',
        long = "input",
        help = "Input image, in layout order (repeatable; default: out/_MBC.png out/_EBC.png)"
    )]
    inputs: Vec<PathBuf>,

    #[arg(short = 'o', long, help = "Output image path (default: BC.png)")]
    output: Option<PathBuf>,

    #[arg(short = 'p', long, help = "Gap between images in pixels (default: 15)")]
    padding: Option<u32>,
}

impl Args {
    fn layout(self) -> RowLayout {
        let defaults = RowLayout::default();
        RowLayout {
            input_paths: if self.inputs.is_empty() {
                defaults.input_paths
            } else {
                self.inputs
            },
            output_path: self.output.unwrap_or(defaults.output_path),
            padding: self.padding.unwrap_or(defaults.padding),
        }
    }
}

fn main() -> Result<()> {
    spectral::init_tracing();

    let layout = Args::parse().layout();
    compose_files(&layout)
        .with_context(|| format!("Failed to compose {}", layout.output_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_gives_reference_layout() {
        let args = Args::try_parse_from(["image_row"]).unwrap();
        assert_eq!(args.layout(), RowLayout::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "image_row", "-i", "a.png", "--input", "b.png", "-i", "c.png", "-o", "row.png", "-p",
            "4",
        ])
        .unwrap();
        let layout = args.layout();

        assert_eq!(
            layout.input_paths,
            vec![
                PathBuf::from("a.png"),
                PathBuf::from("b.png"),
                PathBuf::from("c.png")
            ]
        );
        assert_eq!(layout.output_path, PathBuf::from("row.png"));
        assert_eq!(layout.padding, 4);
    }
}
