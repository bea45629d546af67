//! Benchmark command
//!
//! Tests solver performance across many secrets.

use crate::core::{Code, Rules, generate_all};
use crate::solver::{Solver, Status, StrategyConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub exhausted: usize,
    /// Turns summed over solved games
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Solved games by number of turns
    pub distribution: HashMap<usize, usize>,
    /// Secret that took the most turns
    pub hardest: Option<(Code, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

/// Draw `count` secrets uniformly, with repetition, from the full space
#[must_use]
pub fn sample_secrets(rules: &Rules, count: usize, seed: u64) -> Vec<Code> {
    let space = generate_all(rules.alphabet().len(), rules.code_length());
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .filter_map(|_| space.choose(&mut rng).cloned())
        .collect()
}

/// Every code under the rules, for exhaustive runs
#[must_use]
pub fn all_secrets(rules: &Rules) -> Vec<Code> {
    generate_all(rules.alphabet().len(), rules.code_length())
}

/// Progress bar styled for benchmark runs
///
/// # Errors
/// Returns an error if the progress template is rejected.
pub fn progress_bar(len: usize) -> Result<ProgressBar, String> {
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_err(|e| e.to_string())?
        .progress_chars("█▓▒░");
    let bar = ProgressBar::new(len as u64);
    bar.set_style(style);
    Ok(bar)
}

/// Run the configured strategy against every secret
///
/// One solver is reused across games, so the feedback cache carries over.
/// Each game restarts from the configured seed.
///
/// # Errors
/// Returns an error if the strategy configuration is invalid for the rules.
pub fn run_benchmark(
    rules: &Rules,
    strategy: StrategyConfig,
    secrets: &[Code],
    progress: &ProgressBar,
) -> Result<BenchmarkResult, String> {
    let start = Instant::now();
    let mut solver = Solver::new(rules, strategy).map_err(|e| e.to_string())?;

    let mut solved = 0;
    let mut exhausted = 0;
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut hardest: Option<(Code, usize)> = None;

    for (idx, secret) in secrets.iter().enumerate() {
        solver.reset();
        let turns = solver.play(secret).count();

        match solver.status() {
            Status::Solved => {
                solved += 1;
                total_turns += turns;
                min_turns = min_turns.min(turns);
                max_turns = max_turns.max(turns);
                *distribution.entry(turns).or_insert(0) += 1;
                if hardest.as_ref().is_none_or(|(_, worst)| turns > *worst) {
                    hardest = Some((secret.clone(), turns));
                }
            }
            Status::Exhausted | Status::InProgress => exhausted += 1,
        }

        if idx % 10 == 0 && solved > 0 {
            progress.set_message(format!("Avg: {:.3}", total_turns as f64 / solved as f64));
        }
        progress.inc(1);
    }

    progress.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_games = secrets.len();

    Ok(BenchmarkResult {
        total_games,
        solved,
        exhausted,
        total_turns,
        average_turns: if solved > 0 {
            total_turns as f64 / solved as f64
        } else {
            0.0
        },
        min_turns: if solved > 0 { min_turns } else { 0 },
        max_turns,
        distribution,
        hardest,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        cache_hits: solver.oracle().hits(),
        cache_misses: solver.oracle().misses(),
    })
}
