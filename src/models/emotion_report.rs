use crate::constants::{REPORT_DOMINANT_EMOTION_PREFIX, REPORT_TOTALS_HEADER};
use crate::models::{Emotion, EmotionClassifier, Lexicon, TextRecord};
use crate::types::{EmotionCount, EmotionTally};
use crate::Error;
use log::{debug, info};
use std::fmt;
use std::io::Write;

/// Tally of dominant emotions across a set of records.
///
/// Rendered (via `Display`) as:
///
/// ```text
/// Most common emotion: <label>
/// Emotion Totals
/// anger: <count> (<pct>%)
/// ...
/// anticipation: <count> (<pct>%)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionReport {
    dominant_emotion: Emotion,
    tally: EmotionTally,
}

impl EmotionReport {
    /// Classifies every record body and tallies the results.
    ///
    /// Fails with [`Error::EmptyDataset`] when there are no records.
    pub fn from_records(records: &[TextRecord], lexicon: &Lexicon) -> Result<Self, Error> {
        if records.is_empty() {
            return Err(Error::EmptyDataset);
        }

        info!("Classifying {} records...", records.len());

        let classifier = EmotionClassifier::new(lexicon);
        let mut tally = EmotionTally::default();

        for record in records {
            let emotion = classifier.classify_record(record);
            debug!("Record {} classified as {}", record.id, emotion);

            tally[emotion] += 1;
        }

        debug_assert_eq!(tally.total(), records.len());

        Self::from_tally(tally)
    }

    /// Builds a report from an existing tally. Fails with [`Error::EmptyDataset`] when the
    /// tally is all zero.
    pub fn from_tally(tally: EmotionTally) -> Result<Self, Error> {
        if tally.total() == 0 {
            return Err(Error::EmptyDataset);
        }

        Ok(EmotionReport {
            dominant_emotion: tally.dominant(),
            tally,
        })
    }

    pub fn dominant_emotion(&self) -> Emotion {
        self.dominant_emotion
    }

    pub fn total(&self) -> EmotionCount {
        self.tally.total()
    }

    pub fn count(&self, emotion: Emotion) -> EmotionCount {
        self.tally[emotion]
    }

    /// Share of records classified as `emotion`, in percent.
    pub fn percentage(&self, emotion: Emotion) -> f64 {
        (self.count(emotion) as f64 / self.total() as f64) * 100.0
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Writes the fully rendered report to `sink` in a single call.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<(), Error> {
        let text = self.render();

        sink.write_all(text.as_bytes())?;
        sink.flush()?;

        Ok(())
    }
}

impl fmt::Display for EmotionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}", REPORT_DOMINANT_EMOTION_PREFIX, self.dominant_emotion)?;
        writeln!(f, "{}", REPORT_TOTALS_HEADER)?;

        for (emotion, count) in self.tally.iter() {
            writeln!(f, "{}: {} ({:.2}%)", emotion, count, self.percentage(emotion))?;
        }

        Ok(())
    }
}
