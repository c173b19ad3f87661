//! Compare Mitchell's and Euler's best-candidate blue-noise generators.
//!
//! For each generator, produces `--tests` point sets of `--points` points,
//! rasterizes them to `<output-dir>/MBC_<i>.png` / `<output-dir>/EBC_<i>.png`
//! and reports how many distance evaluations the generator needed. The point
//! images are then reduced to averaged spectra (`_MBC.png`, `_EBC.png`) and,
//! with `--row`, composed side by side for comparison.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spectral::algo::{CandidateStrategy, RunningStats};
use spectral::compose::DEFAULT_PADDING;
use spectral::image_proc::{numbered_path, rasterize_points, save_u8_image};
use spectral::spectrum::INPUT_EXTENSION;
use spectral::{compose_files, DftAverageJob, RowLayout};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate best-candidate blue noise and compare generator cost and spectra"
)]
struct Args {
    #[arg(long, default_value_t = 1000, help = "Points per generated set")]
    points: usize,

    #[arg(long, default_value_t = 100, help = "Point sets per generator")]
    tests: usize,

    #[arg(long, default_value_t = 256, help = "Width and height of point images")]
    image_size: usize,

    #[arg(short = 'o', long, default_value = "out", help = "Directory for all outputs")]
    output_dir: PathBuf,

    #[arg(long, help = "Seed for reproducible point sets (default: from entropy)")]
    seed: Option<u64>,

    #[arg(long, help = "Skip averaging the spectra of the generated sets")]
    skip_dft: bool,

    #[arg(long, help = "Also write the two averaged spectra side by side to this path")]
    row: Option<PathBuf>,
}

/// Cost summary of one generator over all its point sets
struct StrategyReport {
    strategy: CandidateStrategy,
    hot_loops: RunningStats,
}

fn main() -> Result<()> {
    spectral::init_tracing();

    let args = Args::parse();
    anyhow::ensure!(args.tests > 0, "--tests must be at least 1");
    anyhow::ensure!(args.image_size > 0, "--image-size must be at least 1");

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            args.output_dir.display()
        )
    })?;

    let mut rng = match args.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut reports = Vec::with_capacity(CandidateStrategy::ALL.len());
    for strategy in CandidateStrategy::ALL {
        reports.push(generate_sets(strategy, &args, &mut rng)?);
    }

    if let [mitchell, euler] = reports.as_slice() {
        info!(
            "{} hot loops: {:.2}% of {}",
            euler.strategy,
            100.0 * euler.hot_loops.mean() / mitchell.hot_loops.mean().max(1.0),
            mitchell.strategy
        );
    }

    if args.skip_dft {
        return Ok(());
    }

    info!("Making DFTs...");
    let mut spectra = Vec::with_capacity(reports.len());
    for report in &reports {
        let job = DftAverageJob::new(
            set_prefix(&args.output_dir, report.strategy),
            args.tests,
            args.output_dir
                .join(format!("_{}.png", report.strategy.tag())),
        );
        job.run()
            .with_context(|| format!("Failed to average {} spectra", report.strategy))?;
        spectra.push(job.output);
    }

    if let Some(row) = args.row {
        let layout = RowLayout {
            input_paths: spectra,
            output_path: row,
            padding: DEFAULT_PADDING,
        };
        compose_files(&layout)
            .with_context(|| format!("Failed to compose {}", layout.output_path.display()))?;
    }

    Ok(())
}

/// File prefix of a generator's point images, e.g. `out/MBC_`
fn set_prefix(dir: &Path, strategy: CandidateStrategy) -> String {
    dir.join(format!("{}_", strategy.tag()))
        .to_string_lossy()
        .into_owned()
}

fn generate_sets(
    strategy: CandidateStrategy,
    args: &Args,
    rng: &mut StdRng,
) -> Result<StrategyReport> {
    let start = Instant::now();
    let prefix = set_prefix(&args.output_dir, strategy);

    let progress = ProgressBar::new(args.tests as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}")
            .map_err(|e| anyhow::anyhow!("Invalid progress template: {e}"))?
            .progress_chars("=>-"),
    );
    progress.set_message(strategy.tag());

    let mut hot_loops = RunningStats::new();
    for test_index in 0..args.tests {
        let sampling = strategy.generate(args.points, rng);
        hot_loops.push(sampling.hot_loop_count as f64);

        let path = numbered_path(&prefix, test_index, INPUT_EXTENSION);
        save_u8_image(&rasterize_points(&sampling.points, args.image_size), &path)
            .with_context(|| format!("Failed to save point set {}", path.display()))?;
        progress.inc(1);
    }
    progress.finish_and_clear();

    let seconds = start.elapsed().as_secs_f64();
    info!(
        "{}: hot loops = {:.0} (std. dev. {:.2}), generated in {:.4} seconds",
        strategy,
        hot_loops.mean(),
        hot_loops.std_dev(),
        seconds
    );

    Ok(StrategyReport {
        strategy,
        hot_loops,
    })
}
