use crate::types::{LineNumber, SourceName};
use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A lexicon line has the wrong field count or a non-integer score.
    MalformedLexiconLine {
        source: SourceName,
        line: LineNumber,
        content: String,
        reason: String,
    },
    /// A record line is blank, has too few fields or a non-integer identifier.
    MalformedRecordLine {
        source: SourceName,
        line: LineNumber,
        content: String,
        reason: String,
    },
    /// The (filtered) record sequence was empty when building a report.
    EmptyDataset,
    /// User supplied input was rejected before any data was loaded.
    InvalidInput(String),
    /// The interactive input stream ended before every value was read.
    InputClosed,
    ParserError(String),
    IoError(std::io::Error),
}

impl Error {
    /// Whether the caller may reasonably retry with different input.
    ///
    /// Rejected input, unreadable files and malformed data can all be corrected by pointing
    /// at other files. An empty dataset ends the run, as does a closed input stream.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::EmptyDataset | Error::InputClosed)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedLexiconLine {
                source,
                line,
                content,
                reason,
            } => write!(
                f,
                "Malformed lexicon line {} in {}: {} ({:?})",
                line, source, reason, content
            ),
            Error::MalformedRecordLine {
                source,
                line,
                content,
                reason,
            } => write!(
                f,
                "Malformed record line {} in {}: {} ({:?})",
                line, source, reason, content
            ),
            Error::EmptyDataset => write!(f, "No comments in dataset!"),
            Error::InvalidInput(msg) => write!(f, "{}", msg),
            Error::InputClosed => write!(f, "Input closed before all values were provided"),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io_err) => Error::IoError(io_err),
                other => Error::ParserError(format!("{:?}", other)),
            }
        } else {
            Error::ParserError(err.to_string())
        }
    }
}
