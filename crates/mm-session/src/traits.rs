//! The four personality axes and the clamped score vector.

use std::fmt;

use mm_core::{AXIS_COUNT, Effect};

/// Lowest value any axis can hold.
pub const SCORE_MIN: i32 = -10;
/// Highest value any axis can hold.
pub const SCORE_MAX: i32 = 10;

/// One personality dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Introversion (negative) to Extraversion (positive).
    IntroversionExtraversion,
    /// Sensing (negative) to Intuition (positive).
    SensingIntuition,
    /// Feeling (negative) to Thinking (positive).
    FeelingThinking,
    /// Perceiving (negative) to Judging (positive).
    PerceivingJudging,
}

impl Axis {
    /// All axes in effect-vector order.
    pub const ALL: [Axis; AXIS_COUNT] = [
        Axis::IntroversionExtraversion,
        Axis::SensingIntuition,
        Axis::FeelingThinking,
        Axis::PerceivingJudging,
    ];

    /// Position of this axis in effect and score vectors.
    pub fn index(self) -> usize {
        match self {
            Self::IntroversionExtraversion => 0,
            Self::SensingIntuition => 1,
            Self::FeelingThinking => 2,
            Self::PerceivingJudging => 3,
        }
    }

    /// Short code, e.g. `IE`.
    pub fn code(self) -> &'static str {
        match self {
            Self::IntroversionExtraversion => "IE",
            Self::SensingIntuition => "SN",
            Self::FeelingThinking => "FT",
            Self::PerceivingJudging => "PJ",
        }
    }

    /// Pole names, negative end first.
    pub fn poles(self) -> (&'static str, &'static str) {
        match self {
            Self::IntroversionExtraversion => ("Introverted", "Extraverted"),
            Self::SensingIntuition => ("Sensing", "Intuition"),
            Self::FeelingThinking => ("Feeling", "Thinking"),
            Self::PerceivingJudging => ("Perceiving", "Judging"),
        }
    }

    /// Letter for a score on this axis. Zero counts as the negative pole.
    pub fn letter(self, score: i32) -> char {
        let (low, high) = match self {
            Self::IntroversionExtraversion => ('I', 'E'),
            Self::SensingIntuition => ('S', 'N'),
            Self::FeelingThinking => ('F', 'T'),
            Self::PerceivingJudging => ('P', 'J'),
        };
        if score > 0 { high } else { low }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (low, high) = self.poles();
        write!(f, "{low} - {high}")
    }
}

/// The player's four trait scores, each kept within `SCORE_MIN..=SCORE_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraitScores([i32; AXIS_COUNT]);

impl TraitScores {
    /// Build a score vector, clamping every value into range.
    pub fn new(values: [i32; AXIS_COUNT]) -> Self {
        Self(values.map(|v| v.clamp(SCORE_MIN, SCORE_MAX)))
    }

    /// Score on one axis.
    pub fn get(&self, axis: Axis) -> i32 {
        self.0[axis.index()]
    }

    /// All four scores in IE, SN, FT, PJ order.
    pub fn values(&self) -> [i32; AXIS_COUNT] {
        self.0
    }

    /// Add an effect to every axis, clamping each result independently.
    pub fn apply_effect(&mut self, effect: Effect) {
        *self = self.with_effect(effect);
    }

    /// The scores that [`TraitScores::apply_effect`] would produce.
    pub fn with_effect(self, effect: Effect) -> Self {
        let deltas = effect.deltas();
        Self(std::array::from_fn(|i| {
            self.0[i].saturating_add(deltas[i]).clamp(SCORE_MIN, SCORE_MAX)
        }))
    }
}

impl From<[i32; AXIS_COUNT]> for TraitScores {
    fn from(values: [i32; AXIS_COUNT]) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for TraitScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Axis::ALL
            .iter()
            .map(|axis| format!("{} {:+}", axis.code(), self.get(*axis)))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_clamps_out_of_range_values() {
        let scores = TraitScores::new([15, -20, 3, 10]);
        assert_eq!(scores.values(), [10, -10, 3, 10]);
    }

    #[test]
    fn clamp_high() {
        let mut scores = TraitScores::new([9, 0, 0, 0]);
        scores.apply_effect(Effect([5, 0, 0, 0]));
        assert_eq!(scores.get(Axis::IntroversionExtraversion), 10);
    }

    #[test]
    fn clamp_low() {
        let mut scores = TraitScores::new([-9, 0, 0, 0]);
        scores.apply_effect(Effect([-5, 0, 0, 0]));
        assert_eq!(scores.get(Axis::IntroversionExtraversion), -10);
    }

    #[test]
    fn low_clamp_stays_on_its_own_axis() {
        let mut scores = TraitScores::new([4, 0, -8, 0]);
        scores.apply_effect(Effect([0, 0, -6, 0]));
        assert_eq!(scores.values(), [4, 0, -10, 0]);
    }

    #[test]
    fn zero_effect_is_identity() {
        let scores = TraitScores::new([1, -2, 3, -4]);
        assert_eq!(scores.with_effect(Effect::NONE), scores);
    }

    #[test]
    fn extreme_effects_do_not_overflow() {
        let mut scores = TraitScores::new([10, -10, 0, 0]);
        scores.apply_effect(Effect([i32::MAX, i32::MIN, i32::MIN, i32::MAX]));
        assert_eq!(scores.values(), [10, -10, -10, 10]);
    }

    #[test]
    fn axis_indexes_match_order() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn display_scores() {
        let scores = TraitScores::new([5, -3, 0, -7]);
        assert_eq!(scores.to_string(), "IE +5, SN -3, FT +0, PJ -7");
        assert_eq!(
            Axis::FeelingThinking.to_string(),
            "Feeling - Thinking"
        );
    }

    proptest! {
        #[test]
        fn effect_clamps_identically_on_every_axis(
            current in SCORE_MIN..=SCORE_MAX,
            delta in -20i32..=20,
            axis in 0usize..AXIS_COUNT,
        ) {
            let mut values = [0; AXIS_COUNT];
            values[axis] = current;
            let mut deltas = [0; AXIS_COUNT];
            deltas[axis] = delta;

            let mut scores = TraitScores::new(values);
            scores.apply_effect(Effect(deltas));

            prop_assert_eq!(scores.values()[axis], (current + delta).clamp(SCORE_MIN, SCORE_MAX));
            for other in (0..AXIS_COUNT).filter(|i| *i != axis) {
                prop_assert_eq!(scores.values()[other], 0);
            }
        }

        #[test]
        fn all_axes_update_independently(
            current in proptest::array::uniform4(SCORE_MIN..=SCORE_MAX),
            deltas in proptest::array::uniform4(-20i32..=20),
        ) {
            let scores = TraitScores::new(current).with_effect(Effect(deltas));
            for ((value, c), d) in scores.values().into_iter().zip(current).zip(deltas) {
                prop_assert_eq!(value, (c + d).clamp(SCORE_MIN, SCORE_MAX));
            }
        }
    }
}
