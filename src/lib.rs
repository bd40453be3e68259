mod config;
pub use config::DEFAULT_EMOTION_SNIFFER_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    CategoryFilter, Emotion, EmotionClassifier, EmotionReport, EmotionSnifferConfig,
    EmotionVector, Error, Lexicon, TextRecord,
};
pub mod types;
pub mod utils;
pub use types::{
    Author, Category, EmotionCount, EmotionScore, EmotionScores, EmotionTally, EmotionTotal,
    EmotionTotals, RecordId, Token, TokenRef,
};
pub use utils::{
    load_lexicon, load_lexicon_from_path, load_lexicon_from_string, load_text_records,
    load_text_records_from_path, load_text_records_from_string, normalize,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

use log::info;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Returns the dominant emotion of a single piece of text.
pub fn classify_text_emotion(text: &str, lexicon: &Lexicon) -> Emotion {
    EmotionClassifier::new(lexicon).classify(text)
}

/// Classifies every record, writes the rendered report to `sink` and returns the most
/// common emotion.
///
/// Nothing is written when `records` is empty; [`Error::EmptyDataset`] is returned instead.
pub fn build_report<W: Write>(
    records: &[TextRecord],
    lexicon: &Lexicon,
    sink: &mut W,
) -> Result<Emotion, Error> {
    let report = EmotionReport::from_records(records, lexicon)?;

    report.write_to(sink)?;

    Ok(report.dominant_emotion())
}

/// Like [`build_report`], but writes to a newly created file.
///
/// The report is assembled before the file is created, so an empty dataset leaves no file
/// behind. Refuses to overwrite an existing file.
pub fn write_report_file<P: AsRef<Path>>(
    records: &[TextRecord],
    lexicon: &Lexicon,
    report_path: P,
) -> Result<Emotion, Error> {
    let report_path = report_path.as_ref();
    let report = EmotionReport::from_records(records, lexicon)?;

    info!("Writing report to {}...", report_path.display());

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(report_path)?;
    report.write_to(&mut file)?;

    Ok(report.dominant_emotion())
}

/// Runs the whole pipeline: load lexicon, load filtered records, write the report file.
pub fn generate_report_from_files<P, Q, R>(
    lexicon_path: P,
    records_path: Q,
    filter: &CategoryFilter,
    report_path: R,
) -> Result<Emotion, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let lexicon = load_lexicon_from_path(lexicon_path)?;
    let records = load_text_records_from_path(records_path, filter)?;

    write_report_file(&records, &lexicon, report_path)
}
