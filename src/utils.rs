pub mod load_lexicon;
pub mod load_text_records;
pub mod normalize;
pub mod open_source;
pub mod validate_input;

pub use load_lexicon::{
    load_lexicon, load_lexicon_from_path, load_lexicon_from_string,
    load_lexicon_with_custom_config,
};
pub use load_text_records::{
    load_text_records, load_text_records_from_path, load_text_records_from_string,
    load_text_records_with_custom_config,
};
pub use normalize::{clean_text, normalize};
pub use open_source::{is_gzip_path, open_source_reader, source_name_for_path};
pub use validate_input::{
    validate_country_filter, validate_lexicon_path, validate_records_path, validate_report_path,
};
