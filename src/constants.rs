/// Filter keyword which selects every record regardless of its category.
pub const ALL_CATEGORIES_KEYWORD: &str = "all";

/// Countries accepted by the interactive front-end as a category filter.
///
/// Note: The loaders themselves accept any category string; this list is only used for
/// validating user input.
pub const VALID_COUNTRIES: &[&str] = &[
    "bangladesh",
    "brazil",
    "canada",
    "china",
    "egypt",
    "france",
    "germany",
    "india",
    "iran",
    "japan",
    "mexico",
    "nigeria",
    "pakistan",
    "russia",
    "south korea",
    "turkey",
    "united kingdom",
    "united states",
];

pub const REPORT_DOMINANT_EMOTION_PREFIX: &str = "Most common emotion: ";

pub const REPORT_TOTALS_HEADER: &str = "Emotion Totals";

pub const LEXICON_FILE_EXTENSIONS: &[&str] = &[".tsv", ".tsv.gz"];

pub const RECORDS_FILE_EXTENSIONS: &[&str] = &[".csv", ".csv.gz"];

pub const REPORT_FILE_EXTENSIONS: &[&str] = &[".txt"];

pub const GZIP_FILE_EXTENSION: &str = ".gz";
