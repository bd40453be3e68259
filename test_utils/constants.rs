pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const TEST_LEXICON_TSV_PATH: &str = "tests/test_data_files/test_lexicon.tsv";

pub const TEST_COMMENTS_CSV_PATH: &str = "tests/test_data_files/test_comments.csv";

pub const MALFORMED_LEXICON_TSV_PATH: &str = "tests/test_data_files/malformed_lexicon.tsv";

pub const MALFORMED_COMMENTS_CSV_PATH: &str = "tests/test_data_files/malformed_comments.csv";

pub const EXPECTED_REPORT_ALL_PATH: &str = "tests/test_data_files/expected_report_all.txt";

pub const EXPECTED_REPORT_CANADA_PATH: &str = "tests/test_data_files/expected_report_canada.txt";
