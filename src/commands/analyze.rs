//! Guess analysis command
//!
//! Partitions the code space by the feedback a guess would receive.

use crate::core::{Code, Feedback, PureOracle, Rules, generate_all};
use crate::solver::minimax::group_by_feedback;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub total_candidates: usize,
    /// Feedback classes, largest first; equal sizes in ascending feedback order
    pub partitions: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    pub expected_remaining: f64,
}

impl AnalysisResult {
    #[must_use]
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }
}

/// Analyze how a guess splits the full code space
///
/// # Errors
///
/// Returns an error if the guess cannot be parsed under the rules.
pub fn analyze_guess(guess: &str, rules: &Rules) -> Result<AnalysisResult, String> {
    let guess = rules
        .parse_code(guess)
        .map_err(|e| format!("Invalid guess: {e}"))?;
    let candidates = generate_all(rules.alphabet().len(), rules.code_length());
    Ok(analyze_against(guess, &candidates))
}

/// Analyze how a guess splits an arbitrary candidate set
#[must_use]
pub fn analyze_against(guess: Code, candidates: &[Code]) -> AnalysisResult {
    let groups = group_by_feedback(&guess, candidates, &mut PureOracle);

    let mut partitions: Vec<(Feedback, usize)> = groups.into_iter().collect();
    partitions.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let total_candidates = candidates.len();
    let worst_case = partitions.first().map_or(0, |&(_, size)| size);
    let expected_remaining = if total_candidates == 0 {
        0.0
    } else {
        partitions
            .iter()
            .map(|&(_, size)| (size * size) as f64)
            .sum::<f64>()
            / total_candidates as f64
    };

    AnalysisResult {
        guess,
        total_candidates,
        partitions,
        worst_case,
        expected_remaining,
    }
}
