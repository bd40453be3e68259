use crate::constants::{
    LEXICON_FILE_EXTENSIONS, RECORDS_FILE_EXTENSIONS, REPORT_FILE_EXTENSIONS, VALID_COUNTRIES,
};
use crate::models::CategoryFilter;
use crate::Error;
use std::path::PathBuf;

/// Validates the keyword (lexicon) file name: `.tsv` / `.tsv.gz` and existing.
pub fn validate_lexicon_path(file_name: &str) -> Result<PathBuf, Error> {
    validate_existing_path(file_name, "Keyword", LEXICON_FILE_EXTENSIONS)
}

/// Validates the comments (records) file name: `.csv` / `.csv.gz` and existing.
pub fn validate_records_path(file_name: &str) -> Result<PathBuf, Error> {
    validate_existing_path(file_name, "Comments", RECORDS_FILE_EXTENSIONS)
}

/// Validates the report file name: `.txt` and not already present.
pub fn validate_report_path(file_name: &str) -> Result<PathBuf, Error> {
    check_extension(file_name, "Report", REPORT_FILE_EXTENSIONS)?;

    let path = PathBuf::from(file_name);
    if path.exists() {
        return Err(Error::InvalidInput(format!("{} already exists!", file_name)));
    }

    Ok(path)
}

/// Accepts `"all"` or one of [`VALID_COUNTRIES`], case-insensitively.
pub fn validate_country_filter(input: &str) -> Result<CategoryFilter, Error> {
    let country = input.trim().to_lowercase();

    match CategoryFilter::new(&country) {
        CategoryFilter::All => Ok(CategoryFilter::All),
        filter if VALID_COUNTRIES.contains(&country.as_str()) => Ok(filter),
        _ => Err(Error::InvalidInput(format!(
            "{} is not a valid country to filter by!",
            country
        ))),
    }
}

fn validate_existing_path(
    file_name: &str,
    description: &str,
    extensions: &[&str],
) -> Result<PathBuf, Error> {
    check_extension(file_name, description, extensions)?;

    let path = PathBuf::from(file_name);
    if !path.exists() {
        return Err(Error::InvalidInput(format!("{} does not exist!", file_name)));
    }

    Ok(path)
}

fn check_extension(file_name: &str, description: &str, extensions: &[&str]) -> Result<(), Error> {
    let has_extension = extensions
        .iter()
        .any(|extension| file_name.ends_with(extension));

    if has_extension {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "{} file does not end in {}!",
            description,
            extensions.join(" or ")
        )))
    }
}
