use crate::types::{EmotionScores, Token, TokenRef};
use crate::utils::{load_lexicon, load_lexicon_from_path, load_lexicon_from_string};
use crate::Error;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Static lookup table mapping tokens to dense per-emotion scores.
///
/// Tokens are stored exactly as they appear in the lexicon dataset. Since text is lowercased
/// before lookup, a lexicon with uppercase tokens will never match anything.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<Token, EmotionScores>,
}

impl Lexicon {
    pub fn new() -> Self {
        Lexicon {
            entries: HashMap::new(),
        }
    }

    /// Parses a tab-separated lexicon from any reader. See [`load_lexicon`].
    pub fn from_reader<R: Read>(reader: R, source_name: &str) -> Result<Self, Error> {
        load_lexicon(reader, source_name)
    }

    pub fn from_string(tsv: &str) -> Result<Self, Error> {
        load_lexicon_from_string(tsv)
    }

    /// Loads a lexicon file, transparently decompressing `.gz` paths.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        load_lexicon_from_path(path)
    }

    /// Inserts or overwrites the scores of a token, returning the previous scores if any.
    pub fn insert(&mut self, token: Token, scores: EmotionScores) -> Option<EmotionScores> {
        self.entries.insert(token, scores)
    }

    pub fn get(&self, token: &TokenRef) -> Option<&EmotionScores> {
        self.entries.get(token)
    }

    pub fn contains_token(&self, token: &TokenRef) -> bool {
        self.entries.contains_key(token)
    }

    /// Gets the total number of unique tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Token, EmotionScores)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (Token, EmotionScores)>>(iter: I) -> Self {
        Lexicon {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Emotion;

    #[test]
    fn test_insert_overwrites() {
        let mut lexicon = Lexicon::new();
        assert!(lexicon
            .insert("calm".to_string(), EmotionScores::new([0, 1, 0, 1, 0, 0]))
            .is_none());

        let previous = lexicon.insert("calm".to_string(), EmotionScores::new([0, 0, 0, 2, 0, 0]));

        assert_eq!(previous, Some(EmotionScores::new([0, 1, 0, 1, 0, 0])));
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.get("calm").map(|s| s[Emotion::Trust]), Some(2));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let lexicon: Lexicon = vec![("Happy".to_string(), EmotionScores::new([0, 3, 0, 0, 0, 0]))]
            .into_iter()
            .collect();

        assert!(lexicon.contains_token("Happy"));
        assert!(!lexicon.contains_token("happy"));
    }
}
