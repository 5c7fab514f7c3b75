//! Four-letter personality label derived from trait scores.

use crate::traits::{Axis, TraitScores};

/// Resolve the four-letter label for a set of scores.
///
/// Each letter depends only on the sign of its axis: strictly positive picks
/// the second pole (E, N, T, J), zero or negative picks the first (I, S, F, P).
pub fn resolve(scores: &TraitScores) -> String {
    Axis::ALL
        .iter()
        .map(|axis| axis.letter(scores.get(*axis)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_signs() {
        assert_eq!(resolve(&TraitScores::new([5, -3, 2, -7])), "ESTP");
    }

    #[test]
    fn zero_counts_as_negative_pole() {
        assert_eq!(resolve(&TraitScores::default()), "ISFP");
    }

    #[test]
    fn all_positive() {
        assert_eq!(resolve(&TraitScores::new([1, 1, 1, 1])), "ENTJ");
    }

    #[test]
    fn resolve_is_pure() {
        let scores = TraitScores::new([-4, 6, 0, 9]);
        assert_eq!(resolve(&scores), resolve(&scores));
        assert_eq!(resolve(&scores), "INFJ");
    }
}
