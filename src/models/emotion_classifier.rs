use crate::models::{Emotion, Lexicon, TextRecord};
use crate::types::EmotionTotals;
use crate::utils::normalize;

/// Scores text against a [`Lexicon`] and picks one dominant emotion.
pub struct EmotionClassifier<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> EmotionClassifier<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        EmotionClassifier { lexicon }
    }

    /// Sums the full score vector of every token found in the lexicon.
    ///
    /// Unknown tokens contribute nothing. Summation is order independent and is carried out
    /// in [`EmotionTotals`], so even scores near the `i64` limits add up exactly.
    pub fn score_tokens<T: AsRef<str>>(&self, tokens: &[T]) -> EmotionTotals {
        let mut totals = EmotionTotals::default();

        for token in tokens {
            if let Some(scores) = self.lexicon.get(token.as_ref()) {
                totals += scores;
            }
        }

        totals
    }

    pub fn score_text(&self, text: &str) -> EmotionTotals {
        self.score_tokens(&normalize(text))
    }

    /// Returns the highest scoring emotion, breaking ties by [`Emotion::ALL`] order.
    ///
    /// Text with no lexicon matches is tied at zero everywhere and yields [`Emotion::Anger`].
    pub fn classify(&self, text: &str) -> Emotion {
        self.score_text(text).dominant()
    }

    pub fn classify_record(&self, record: &TextRecord) -> Emotion {
        self.classify(&record.body)
    }
}
