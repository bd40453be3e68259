use crate::constants::GZIP_FILE_EXTENSION;
use crate::types::SourceName;
use crate::Error;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Opens a data source for reading, decompressing it on the fly when the path ends in `.gz`.
pub fn open_source_reader(path: &Path) -> Result<Box<dyn Read>, Error> {
    let file = File::open(path)?;

    if is_gzip_path(path) {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

pub fn is_gzip_path(path: &Path) -> bool {
    path.to_string_lossy()
        .to_lowercase()
        .ends_with(GZIP_FILE_EXTENSION)
}

/// Name used to identify a file based source in error messages.
pub fn source_name_for_path(path: &Path) -> SourceName {
    path.display().to_string()
}
