//! Premise mismatch scoring
//!
//! Treats a candidate as a hypothetical secret and measures how far the
//! feedback it would have produced is from the feedback actually received.

use crate::core::{Code, FeedbackOracle, Premise};

/// Sum of `|Δblack| + |Δwhite|` over every premise
///
/// The true secret always scores 0, so the score works as a soft membership
/// test even on an unfiltered candidate list.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, Feedback, Premise, PureOracle};
/// use mastermind_solver::solver::inference::calculate_score;
///
/// let secret = Code::from_indices(&[0, 0, 1, 2]);
/// let guess = Code::from_indices(&[0, 1, 2, 3]);
/// let premises = vec![Premise::new(guess.clone(), Feedback::calculate(&secret, &guess))];
///
/// assert_eq!(calculate_score(&secret, &premises, &mut PureOracle), 0);
/// ```
pub fn calculate_score<O: FeedbackOracle + ?Sized>(
    candidate: &Code,
    premises: &[Premise],
    oracle: &mut O,
) -> u32 {
    premises
        .iter()
        .map(|premise| {
            oracle
                .evaluate(candidate, &premise.guess)
                .distance(premise.feedback)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, PureOracle, generate_all};

    fn premises_for(secret: &Code, guesses: &[&[u8]]) -> Vec<Premise> {
        guesses
            .iter()
            .map(|g| {
                let guess = Code::from_indices(g);
                let feedback = Feedback::calculate(secret, &guess);
                Premise::new(guess, feedback)
            })
            .collect()
    }

    #[test]
    fn no_premises_scores_zero() {
        assert_eq!(
            calculate_score(&Code::from_indices(&[1, 2, 3]), &[], &mut PureOracle),
            0
        );
    }

    #[test]
    fn secret_scores_zero_for_every_secret() {
        let guesses: [&[u8]; 3] = [&[0, 0, 1], &[1, 2, 3], &[3, 3, 0]];
        for secret in generate_all(4, 3) {
            let premises = premises_for(&secret, &guesses);
            assert_eq!(calculate_score(&secret, &premises, &mut PureOracle), 0);
        }
    }

    #[test]
    fn mismatch_is_measured() {
        let premises = vec![Premise::new(
            Code::from_indices(&[0, 0, 0, 0]),
            Feedback::new(2, 0),
        )];

        // Would have given (0, 0): two black short
        let far = Code::from_indices(&[1, 1, 1, 1]);
        assert_eq!(calculate_score(&far, &premises, &mut PureOracle), 2);

        // Would have given (4, 0): two black over
        let over = Code::from_indices(&[0, 0, 0, 0]);
        assert_eq!(calculate_score(&over, &premises, &mut PureOracle), 2);
    }

    #[test]
    fn inconsistent_codes_score_positive() {
        let secret = Code::from_indices(&[2, 0, 1]);
        let premises = premises_for(&secret, &[&[0, 1, 2], &[2, 2, 2]]);

        for code in generate_all(3, 3) {
            let score = calculate_score(&code, &premises, &mut PureOracle);
            let consistent = premises.iter().all(|p| p.admits(&code, &mut PureOracle));
            assert_eq!(score == 0, consistent, "{code}");
        }
    }
}
