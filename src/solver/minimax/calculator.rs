//! Minimax worst-case calculation for feedback partitions
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible feedback.

use crate::core::{Code, Feedback, FeedbackOracle};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each possible feedback that could result from this guess:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, PureOracle};
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let guess = Code::from_indices(&[0, 1]);
/// let candidates = vec![Code::from_indices(&[0, 1]), Code::from_indices(&[1, 0])];
///
/// assert_eq!(calculate_max_remaining(&guess, &candidates, &mut PureOracle), 1);
/// ```
pub fn calculate_max_remaining<O: FeedbackOracle + ?Sized>(
    guess: &Code,
    candidates: &[Code],
    oracle: &mut O,
) -> usize {
    max_remaining_within(guess, candidates, usize::MAX, oracle).unwrap_or(usize::MAX)
}

/// Worst case for a guess, abandoned as soon as it exceeds `limit`
///
/// Returns `None` once any feedback class grows past `limit`, which lets the
/// selector skip guesses that cannot beat the best one found so far.
pub fn max_remaining_within<O: FeedbackOracle + ?Sized>(
    guess: &Code,
    candidates: &[Code],
    limit: usize,
    oracle: &mut O,
) -> Option<usize> {
    let length = guess.len();
    let mut counts = vec![0usize; Feedback::slot_count(length)];
    let mut worst = 0;

    for candidate in candidates {
        let slot = oracle.evaluate(candidate, guess).slot(length);
        counts[slot] += 1;
        worst = worst.max(counts[slot]);
        if worst > limit {
            return None;
        }
    }

    Some(worst)
}

/// Group candidates by the feedback they produce with the guess
pub fn group_by_feedback<O: FeedbackOracle + ?Sized>(
    guess: &Code,
    candidates: &[Code],
    oracle: &mut O,
) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = oracle.evaluate(candidate, guess);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PureOracle, generate_all};

    fn code(indices: &[u8]) -> Code {
        Code::from_indices(indices)
    }

    #[test]
    fn max_remaining_perfect_split() {
        // Each candidate lands in its own class
        let guess = code(&[0, 0]);
        let candidates = [code(&[0, 0]), code(&[1, 1])];

        let max = calculate_max_remaining(&guess, &candidates, &mut PureOracle);
        assert_eq!(max, 1);
    }

    #[test]
    fn max_remaining_all_same_feedback() {
        // Guess shares nothing with any candidate
        let guess = code(&[3, 3]);
        let candidates = [code(&[0, 0]), code(&[1, 1]), code(&[2, 2])];

        let max = calculate_max_remaining(&guess, &candidates, &mut PureOracle);
        assert_eq!(max, 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let max = calculate_max_remaining(&code(&[0, 1]), &[], &mut PureOracle);
        assert_eq!(max, 0);
    }

    #[test]
    fn max_remaining_bounds() {
        let guess = code(&[0, 0, 1, 1]);
        let candidates = generate_all(6, 4);

        let max = calculate_max_remaining(&guess, &candidates, &mut PureOracle);
        assert!(max > 0 && max <= candidates.len());
        // Known result for the 1122 opening on the standard game
        assert_eq!(max, 256);
    }

    #[test]
    fn within_limit_stops_early() {
        let guess = code(&[3, 3]);
        let candidates = [code(&[0, 0]), code(&[1, 1]), code(&[2, 2])];

        assert_eq!(
            max_remaining_within(&guess, &candidates, 2, &mut PureOracle),
            None
        );
        assert_eq!(
            max_remaining_within(&guess, &candidates, 3, &mut PureOracle),
            Some(3)
        );
    }

    #[test]
    fn group_by_feedback_works() {
        let guess = code(&[0, 1, 2]);
        let candidates = generate_all(3, 3);

        let groups = group_by_feedback(&guess, &candidates, &mut PureOracle);

        assert_eq!(groups.values().sum::<usize>(), 27);
        assert_eq!(groups.get(&Feedback::perfect(3)), Some(&1));
        assert_eq!(
            groups.values().max().copied(),
            Some(calculate_max_remaining(&guess, &candidates, &mut PureOracle))
        );
    }
}
