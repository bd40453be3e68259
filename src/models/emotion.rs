use crate::Error;
use std::fmt;
use std::str::FromStr;

/// The fixed set of emotion categories.
///
/// Declaration order is significant: it is the tie-break priority used wherever two
/// emotions share the highest score or count. Always iterate via [`Emotion::ALL`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Emotion {
    Anger,
    Joy,
    Fear,
    Trust,
    Sadness,
    Anticipation,
}

impl Emotion {
    /// Number of emotion categories.
    pub const COUNT: usize = 6;

    /// Every emotion, in priority order.
    pub const ALL: [Emotion; Emotion::COUNT] = [
        Emotion::Anger,
        Emotion::Joy,
        Emotion::Fear,
        Emotion::Trust,
        Emotion::Sadness,
        Emotion::Anticipation,
    ];

    /// Position of this emotion in [`Emotion::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Joy => "joy",
            Emotion::Fear => "fear",
            Emotion::Trust => "trust",
            Emotion::Sadness => "sadness",
            Emotion::Anticipation => "anticipation",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();

        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| Error::InvalidInput(format!("{} is not a known emotion!", label)))
    }
}
