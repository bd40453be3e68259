use crate::models::{CategoryFilter, EmotionSnifferConfig, TextRecord};
use crate::types::{LineNumber, RecordId};
use crate::utils::{open_source_reader, source_name_for_path};
use crate::{Error, DEFAULT_EMOTION_SNIFFER_CONFIG};
use log::info;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::Path;

/// Number of fields in a record line: `id,author,category,body`.
const RECORD_FIELD_COUNT: usize = 4;

/// Parses records where each line is `id,author,category,body`.
///
/// The body is everything after the third comma, so it may contain commas itself. Quotes
/// have no special meaning. Records are kept in source order when `filter` matches their
/// category. A blank line, a line with fewer than four fields, or an id that is not an
/// integer aborts the load with [`Error::MalformedRecordLine`]. Only the terminator of the
/// last line is optional.
pub fn load_text_records<R: Read>(
    reader: R,
    source_name: &str,
    filter: &CategoryFilter,
) -> Result<Vec<TextRecord>, Error> {
    load_text_records_with_custom_config(DEFAULT_EMOTION_SNIFFER_CONFIG, reader, source_name, filter)
}

pub fn load_text_records_with_custom_config<R: Read>(
    config: &EmotionSnifferConfig,
    reader: R,
    source_name: &str,
    filter: &CategoryFilter,
) -> Result<Vec<TextRecord>, Error> {
    info!(
        "Loading records from {} (filter: {})...",
        source_name, filter
    );

    let mut text_records = Vec::new();
    let mut total_lines: usize = 0;

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        total_lines += 1;

        let text_record =
            parse_text_record(config, &line, source_name, (index + 1) as LineNumber)?;

        if filter.matches(&text_record.category) {
            text_records.push(text_record);
        }
    }

    info!(
        "Loaded {} of {} records matching filter {}",
        text_records.len(),
        total_lines,
        filter
    );

    Ok(text_records)
}

pub fn load_text_records_from_string(
    csv: &str,
    filter: &CategoryFilter,
) -> Result<Vec<TextRecord>, Error> {
    load_text_records(Cursor::new(csv), "<string>", filter)
}

pub fn load_text_records_from_path<P: AsRef<Path>>(
    path: P,
    filter: &CategoryFilter,
) -> Result<Vec<TextRecord>, Error> {
    let path = path.as_ref();
    let reader = open_source_reader(path)?;

    load_text_records(reader, &source_name_for_path(path), filter)
}

fn parse_text_record(
    config: &EmotionSnifferConfig,
    content: &str,
    source_name: &str,
    line: LineNumber,
) -> Result<TextRecord, Error> {
    let malformed = |reason: String| Error::MalformedRecordLine {
        source: source_name.to_string(),
        line,
        content: content.to_string(),
        reason,
    };

    // Surrounding whitespace belongs to the line, not to the id or the body
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(malformed("blank line".to_string()));
    }

    let fields: Vec<&str> = trimmed
        .splitn(RECORD_FIELD_COUNT, config.record_delimiter as char)
        .collect();

    if fields.len() < RECORD_FIELD_COUNT {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            RECORD_FIELD_COUNT,
            fields.len()
        )));
    }

    let id = fields[0]
        .trim()
        .parse::<RecordId>()
        .map_err(|_| malformed(format!("id {:?} is not an integer", fields[0])))?;

    Ok(TextRecord {
        id,
        author: fields[1].to_string(),
        category: fields[2].to_string(),
        body: fields[RECORD_FIELD_COUNT - 1].to_string(),
    })
}
