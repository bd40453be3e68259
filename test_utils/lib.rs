pub mod constants;

use constants::{TEST_COMMENTS_CSV_PATH, TEST_LEXICON_TSV_PATH};
use emotion_sniffer::{
    classify_text_emotion, load_lexicon_from_path, load_text_records_from_path, CategoryFilter,
    Emotion, Lexicon, TextRecord,
};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Loads the lexicon fixture shared by the integration tests and benchmarks.
pub fn load_test_lexicon() -> Lexicon {
    load_lexicon_from_path(TEST_LEXICON_TSV_PATH).expect("Failed to load test lexicon")
}

pub fn load_test_records(filter: &str) -> Vec<TextRecord> {
    load_text_records_from_path(TEST_COMMENTS_CSV_PATH, &CategoryFilter::new(filter))
        .expect("Failed to load test comments")
}

/// Returns a path in the system temp directory which does not exist yet.
///
/// The name is prefixed with the process id so parallel test binaries don't collide.
pub fn temp_output_path(file_name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "emotion_sniffer_{}_{}",
        std::process::id(),
        file_name
    ));

    if path.exists() {
        fs::remove_file(&path).expect("Failed to remove stale temp file");
    }

    path
}

/// Writes a gzip compressed copy of `source` to a fresh temp path and returns it.
pub fn gzip_to_temp_file(source: &Path, file_name: &str) -> PathBuf {
    let output_path = temp_output_path(file_name);

    let mut input_file = File::open(source).expect("Could not open the input file");
    let output_file = File::create(&output_path).expect("Could not create the output file");

    let mut encoder = GzEncoder::new(output_file, Compression::default());
    io::copy(&mut input_file, &mut encoder).expect("Failed to compress the file");
    encoder.finish().expect("Failed to finalize compression");

    output_path
}

// Helper function to get the expected emotion from the text file
pub fn get_expected_emotion(file_path: &Path) -> Emotion {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .find_map(|line| line.trim().strip_prefix("EXPECTED:"))
        .expect("Test file has no EXPECTED: line")
        .parse()
        .expect("EXPECTED: line does not name an emotion")
}

/// Returns the file content minus the `EXPECTED:` and `COMMENT:` directive lines.
pub fn get_test_file_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("EXPECTED:")
                && !line.trim_start().starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Classifies a test file and returns `(expected, actual)`.
pub fn run_test_for_file(file_path: &Path, lexicon: &Lexicon) -> (Emotion, Emotion) {
    let text = get_test_file_text(file_path);
    let expected = get_expected_emotion(file_path);

    eprintln!("Testing file: {}", file_path.display());

    (expected, classify_text_emotion(&text, lexicon))
}
