//! Candidate space enumeration and filtering
//!
//! The full space is every code over the alphabet. Candidates are the codes
//! that would have produced every recorded premise.

use super::{Code, FeedbackOracle, Premise};

/// Enumerate every code of `length` symbols drawn from `alphabet_size` symbols
///
/// Codes come out in lexicographic order with the first position most
/// significant, so `generate_all(n, len)[i].rank(n) == i`.
///
/// # Examples
/// ```
/// use mastermind_solver::core::generate_all;
///
/// let space = generate_all(6, 4);
/// assert_eq!(space.len(), 1296);
/// assert_eq!(space[1].to_string(), "AAAB");
/// ```
#[must_use]
pub fn generate_all(alphabet_size: usize, length: usize) -> Vec<Code> {
    if alphabet_size == 0 || length == 0 || alphabet_size > usize::from(u8::MAX) {
        return Vec::new();
    }

    let total = u32::try_from(length)
        .ok()
        .and_then(|exp| alphabet_size.checked_pow(exp))
        .unwrap_or(0);
    let mut codes = Vec::with_capacity(total);
    let mut digits = vec![0u8; length];

    loop {
        codes.push(Code::from_indices(&digits));

        // Odometer increment from the last position
        let mut position = length;
        loop {
            if position == 0 {
                return codes;
            }
            position -= 1;
            digits[position] += 1;
            if usize::from(digits[position]) < alphabet_size {
                break;
            }
            digits[position] = 0;
        }
    }
}

/// Whether `code` is consistent with every premise
pub fn is_consistent<O: FeedbackOracle + ?Sized>(
    code: &Code,
    premises: &[Premise],
    oracle: &mut O,
) -> bool {
    premises.iter().all(|premise| premise.admits(code, oracle))
}

/// Keep the candidates consistent with every premise, preserving order
pub fn filter<O: FeedbackOracle + ?Sized>(
    candidates: &[Code],
    premises: &[Premise],
    oracle: &mut O,
) -> Vec<Code> {
    candidates
        .iter()
        .filter(|&code| is_consistent(code, premises, oracle))
        .cloned()
        .collect()
}

/// Apply one new premise to an already filtered candidate list, in place
///
/// Equivalent to [`filter`] over the full history as long as `candidates`
/// already satisfies the older premises.
pub fn refine<O: FeedbackOracle + ?Sized>(
    candidates: &mut Vec<Code>,
    premise: &Premise,
    oracle: &mut O,
) {
    candidates.retain(|code| premise.admits(code, oracle));
}
