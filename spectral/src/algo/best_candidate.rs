//! Best-candidate blue-noise point generation.
//!
//! Both generators place points in the unit square one at a time. For the
//! k-th point (0-based) they draw `k + 1` uniform candidates and keep the one
//! farthest from every point placed so far.
//!
//! - **Mitchell's best candidate** always evaluates every candidate.
//! - **Euler's best candidate** treats the choice as an optimal stopping
//!   problem: after the first `ceil((k + 1) / e)` candidates it accepts the
//!   first candidate that beats everything seen so far.
//!
//! The cost of a run is reported as the number of candidate-to-point distance
//! evaluations ("hot loop" iterations).

use rand::Rng;
use std::fmt;

/// A point in `[0, 1)²`
pub type SamplePoint = [f32; 2];

/// Points produced by one generator run, with the work it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampling {
    pub points: Vec<SamplePoint>,
    pub hot_loop_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateStrategy {
    Mitchell,
    Euler,
}

impl CandidateStrategy {
    pub const ALL: [CandidateStrategy; 2] = [CandidateStrategy::Mitchell, CandidateStrategy::Euler];

    /// Short tag used in file names and log lines
    pub fn tag(&self) -> &'static str {
        match self {
            CandidateStrategy::Mitchell => "MBC",
            CandidateStrategy::Euler => "EBC",
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Sampling {
        match self {
            CandidateStrategy::Mitchell => mitchells_best_candidate(count, rng),
            CandidateStrategy::Euler => eulers_best_candidate(count, rng),
        }
    }
}

impl fmt::Display for CandidateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Mitchell's best candidate: every candidate is scored.
pub fn mitchells_best_candidate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Sampling {
    best_candidate(count, || [rng.gen::<f32>(), rng.gen::<f32>()], |_| None)
}

/// Euler's best candidate: stop at the first improvement past `ceil(n / e)`.
pub fn eulers_best_candidate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Sampling {
    best_candidate(
        count,
        || [rng.gen::<f32>(), rng.gen::<f32>()],
        |candidate_count| Some(euler_exit_index(candidate_count)),
    )
}

/// First candidate index at which an improvement ends the search, `ceil(n / e)`
/// for `n` candidates.
pub fn euler_exit_index(candidate_count: usize) -> usize {
    let one_over_e = (-1.0f32).exp();
    (candidate_count as f32 * one_over_e).ceil() as usize
}

/// Shared candidate loop. `early_exit` maps the candidate count for a point
/// to the index from which an improving candidate is accepted immediately.
fn best_candidate<C, F>(count: usize, mut next_candidate: C, early_exit: F) -> Sampling
where
    C: FnMut() -> SamplePoint,
    F: Fn(usize) -> Option<usize>,
{
    let mut points: Vec<SamplePoint> = Vec::with_capacity(count);
    let mut hot_loop_count = 0u64;

    for new_index in 0..count {
        let candidate_count = new_index + 1;
        let exit_index = early_exit(candidate_count);

        let mut best = [0.0f32; 2];
        let mut best_score = 0.0f32;

        for candidate_index in 0..candidate_count {
            let candidate = next_candidate();

            // Distance to the closest existing point; unbounded with no points yet.
            let mut score = f32::MAX;
            for point in &points {
                score = score.min(distance(&candidate, point));
                hot_loop_count += 1;
            }

            if score > best_score {
                best_score = score;
                best = candidate;

                if exit_index.is_some_and(|exit| candidate_index >= exit) {
                    break;
                }
            }
        }

        points.push(best);
    }

    Sampling {
        points,
        hot_loop_count,
    }
}

fn distance(a: &SamplePoint, b: &SamplePoint) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}
