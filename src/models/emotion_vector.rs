use crate::models::Emotion;
use std::iter::Sum;
use std::ops::{AddAssign, Index, IndexMut};

/// A dense, fixed-size mapping from every [`Emotion`] to a value.
///
/// Backed by an array indexed by the emotion's position, so every emotion always has an
/// entry and iteration order is always the priority order of [`Emotion::ALL`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct EmotionVector<T>([T; Emotion::COUNT]);

impl<T> EmotionVector<T> {
    pub fn new(values: [T; Emotion::COUNT]) -> Self {
        EmotionVector(values)
    }

    pub fn as_array(&self) -> &[T; Emotion::COUNT] {
        &self.0
    }

    /// Iterates `(emotion, value)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, &T)> {
        Emotion::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T: Copy + Ord> EmotionVector<T> {
    /// Returns the first emotion, in priority order, whose value equals the maximum.
    ///
    /// When every value is tied (e.g. all zero) this is [`Emotion::Anger`].
    pub fn dominant(&self) -> Emotion {
        let mut dominant = Emotion::ALL[0];
        let mut max_value = self.0[0];

        for (emotion, &value) in self.iter().skip(1) {
            // Strict comparison keeps the earlier emotion on ties
            if value > max_value {
                dominant = emotion;
                max_value = value;
            }
        }

        dominant
    }
}

impl<T: Copy + Sum<T>> EmotionVector<T> {
    pub fn total(&self) -> T {
        self.0.iter().copied().sum()
    }
}

impl<T> Index<Emotion> for EmotionVector<T> {
    type Output = T;

    fn index(&self, emotion: Emotion) -> &T {
        &self.0[emotion.index()]
    }
}

impl<T> IndexMut<Emotion> for EmotionVector<T> {
    fn index_mut(&mut self, emotion: Emotion) -> &mut T {
        &mut self.0[emotion.index()]
    }
}

/// Element-wise addition, widening each value of `other` into `T` first.
impl<T, U> AddAssign<&EmotionVector<U>> for EmotionVector<T>
where
    T: AddAssign + From<U>,
    U: Copy,
{
    fn add_assign(&mut self, other: &EmotionVector<U>) {
        for (value, &other_value) in self.0.iter_mut().zip(other.0.iter()) {
            *value += T::from(other_value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EmotionScore, EmotionScores, EmotionTally, EmotionTotals};

    #[test]
    fn test_dominant_picks_maximum() {
        let scores = EmotionScores::new([0, 3, 7, 1, 0, 2]);
        assert_eq!(scores.dominant(), Emotion::Fear);
    }

    #[test]
    fn test_dominant_breaks_ties_by_priority() {
        let scores = EmotionScores::new([0, 0, 0, 5, 0, 5]);
        assert_eq!(scores.dominant(), Emotion::Trust);

        let scores = EmotionScores::new([0, 4, 0, 0, 0, 4]);
        assert_eq!(scores.dominant(), Emotion::Joy);
    }

    #[test]
    fn test_dominant_all_zero_is_first() {
        assert_eq!(EmotionScores::default().dominant(), Emotion::Anger);
    }

    #[test]
    fn test_dominant_with_negative_totals() {
        let scores = EmotionScores::new([-4, -2, -9, -2, -3, -7]);
        assert_eq!(scores.dominant(), Emotion::Joy);
    }

    #[test]
    fn test_add_assign_is_elementwise() {
        let mut scores = EmotionScores::new([1, 2, 3, 4, 5, 6]);
        scores += &EmotionScores::new([-1, 0, 1, 0, -5, 1]);
        assert_eq!(scores, EmotionScores::new([0, 2, 4, 4, 0, 7]));
    }

    #[test]
    fn test_add_assign_widens_past_score_range() {
        let max_scores = EmotionScores::new([EmotionScore::MAX, 0, 0, 0, 0, EmotionScore::MIN]);

        let mut totals = EmotionTotals::default();
        totals += &max_scores;
        totals += &max_scores;

        assert_eq!(totals[Emotion::Anger], 2 * EmotionScore::MAX as i128);
        assert_eq!(totals[Emotion::Anticipation], 2 * EmotionScore::MIN as i128);
        assert_eq!(totals.dominant(), Emotion::Anger);
    }

    #[test]
    fn test_index_by_emotion() {
        let mut tally = EmotionTally::default();
        tally[Emotion::Sadness] += 2;
        tally[Emotion::Joy] += 1;

        assert_eq!(tally[Emotion::Sadness], 2);
        assert_eq!(tally.as_array(), &[0, 1, 0, 0, 2, 0]);
        assert_eq!(tally.total(), 3);
    }
}
