use crate::models::{Emotion, EmotionSnifferConfig, Lexicon};
use crate::types::{EmotionScore, EmotionScores, LineNumber};
use crate::utils::{open_source_reader, source_name_for_path};
use crate::{Error, DEFAULT_EMOTION_SNIFFER_CONFIG};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::io::{Cursor, Read};
use std::path::Path;

/// Parses a lexicon where each line is `token<TAB>anger<TAB>joy<TAB>fear<TAB>trust<TAB>sadness<TAB>anticipation`.
///
/// Every line must carry exactly one score per emotion; anything else aborts the load with
/// [`Error::MalformedLexiconLine`]. Blank lines are skipped. When a token appears more than
/// once, the last occurrence wins.
///
/// Tokens are stored as written apart from leading whitespace of the line, so `"happy "`
/// stays distinct from `"happy"` and never matches normalized text. Scores may be padded.
pub fn load_lexicon<R: Read>(reader: R, source_name: &str) -> Result<Lexicon, Error> {
    load_lexicon_with_custom_config(DEFAULT_EMOTION_SNIFFER_CONFIG, reader, source_name)
}

pub fn load_lexicon_with_custom_config<R: Read>(
    config: &EmotionSnifferConfig,
    reader: R,
    source_name: &str,
) -> Result<Lexicon, Error> {
    info!("Loading lexicon from {}...", source_name);

    let mut reader = ReaderBuilder::new()
        .delimiter(config.lexicon_delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut lexicon = Lexicon::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());

        let (token, scores) = parse_lexicon_record(config, &record, source_name, line)?;

        if lexicon.insert(token.clone(), scores).is_some() {
            debug!("Duplicate lexicon token {:?} on line {}; keeping last", token, line);
        }
    }

    info!("Loaded {} lexicon tokens", lexicon.len());

    Ok(lexicon)
}

pub fn load_lexicon_from_string(tsv: &str) -> Result<Lexicon, Error> {
    load_lexicon(Cursor::new(tsv), "<string>")
}

pub fn load_lexicon_from_path<P: AsRef<Path>>(path: P) -> Result<Lexicon, Error> {
    let path = path.as_ref();
    let reader = open_source_reader(path)?;

    load_lexicon(reader, &source_name_for_path(path))
}

fn parse_lexicon_record(
    config: &EmotionSnifferConfig,
    record: &StringRecord,
    source_name: &str,
    line: LineNumber,
) -> Result<(String, EmotionScores), Error> {
    let delimiter = (config.lexicon_delimiter as char).to_string();
    let malformed = |reason: String| Error::MalformedLexiconLine {
        source: source_name.to_string(),
        line,
        content: record.iter().collect::<Vec<_>>().join(delimiter.as_str()),
        reason,
    };

    let score_field_count = record.len().saturating_sub(1);
    if score_field_count != Emotion::COUNT {
        return Err(malformed(format!(
            "expected {} scores, found {}",
            Emotion::COUNT,
            score_field_count
        )));
    }

    let token = record.get(0).unwrap_or_default().trim_start();
    if token.is_empty() {
        return Err(malformed("missing token".to_string()));
    }

    let mut scores = EmotionScores::default();
    for (emotion, field) in Emotion::ALL.into_iter().zip(record.iter().skip(1)) {
        scores[emotion] = field.trim().parse::<EmotionScore>().map_err(|_| {
            malformed(format!("{} score {:?} is not an integer", emotion, field))
        })?;
    }

    Ok((token.to_string(), scores))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_lexicon() {
        let lexicon =
            load_lexicon_from_string("happy\t0\t3\t0\t0\t0\t0\nscared\t0\t0\t2\t0\t0\t0\n")
                .unwrap();

        assert_eq!(lexicon.len(), 2);
        assert_eq!(
            lexicon.get("happy"),
            Some(&EmotionScores::new([0, 3, 0, 0, 0, 0]))
        );
        assert_eq!(
            lexicon.get("scared"),
            Some(&EmotionScores::new([0, 0, 2, 0, 0, 0]))
        );
    }

    #[test]
    fn test_negative_scores_and_crlf() {
        let lexicon = load_lexicon_from_string("grim\t1\t-2\t0\t0\t3\t0\r\n").unwrap();
        assert_eq!(
            lexicon.get("grim"),
            Some(&EmotionScores::new([1, -2, 0, 0, 3, 0]))
        );
    }

    #[test]
    fn test_duplicate_token_last_wins() {
        let lexicon =
            load_lexicon_from_string("love\t0\t1\t0\t0\t0\t0\nlove\t0\t0\t0\t4\t0\t0\n").unwrap();

        assert_eq!(lexicon.len(), 1);
        assert_eq!(
            lexicon.get("love"),
            Some(&EmotionScores::new([0, 0, 0, 4, 0, 0]))
        );
    }

    #[test]
    fn test_token_keeps_trailing_whitespace() {
        let lexicon =
            load_lexicon_from_string("happy \t0\t3\t0\t0\t0\t0\n  calm\t0\t1\t0\t1\t0\t0\n")
                .unwrap();

        assert!(lexicon.contains_token("happy "));
        assert!(!lexicon.contains_token("happy"));
        assert!(lexicon.contains_token("calm"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let lexicon = load_lexicon_from_string("\nhope\t0\t0\t0\t0\t0\t1\n\n").unwrap();
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_too_few_scores_is_malformed() {
        let err = load_lexicon_from_string("happy\t0\t3\t0\t0\t0\t0\nsad\t0\t0\t0\n").unwrap_err();

        match err {
            Error::MalformedLexiconLine {
                source,
                line,
                content,
                ..
            } => {
                assert_eq!(source, "<string>");
                assert_eq!(line, 2);
                assert_eq!(content, "sad\t0\t0\t0");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_too_many_scores_is_malformed() {
        let result = load_lexicon_from_string("happy\t0\t3\t0\t0\t0\t0\t9\n");
        assert!(matches!(result, Err(Error::MalformedLexiconLine { .. })));
    }

    #[test]
    fn test_non_integer_score_is_malformed() {
        let result = load_lexicon_from_string("happy\t0\tlots\t0\t0\t0\t0\n");

        match result {
            Err(Error::MalformedLexiconLine { reason, .. }) => assert!(reason.contains("joy")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
