use crate::models::EmotionVector;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are lowercase, purely alphabetic words.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A single per-emotion score. Lexicon scores may be negative, so running totals are signed.
pub type EmotionScore = i64;

/// The number of records whose dominant emotion matched a given label.
pub type EmotionCount = usize;

/// A running per-emotion total for one text. Twice as wide as [`EmotionScore`], so summing
/// any realistic number of lexicon scores cannot overflow.
pub type EmotionTotal = i128;

/// A dense score vector with one entry for every emotion.
pub type EmotionScores = EmotionVector<EmotionScore>;

/// A dense vector of per-emotion totals for one text.
pub type EmotionTotals = EmotionVector<EmotionTotal>;

/// A dense count vector with one entry for every emotion.
pub type EmotionTally = EmotionVector<EmotionCount>;

/// Identifier of a text record, as found in the first column of the records dataset.
pub type RecordId = i64;

/// Represents the author (user name) of a text record.
pub type Author = String;

/// Represents the categorical field (e.g. country) of a text record.
pub type Category = String;

/// Human readable identifier of a data source (usually a file path), used in error messages.
pub type SourceName = String;

/// 1-based line number within a data source.
pub type LineNumber = u64;
