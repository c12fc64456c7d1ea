/*!
error module defines the error types used in bgpkit-updates.
*/
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdatesError {
    /// The decoder could not read further entries from the stream, e.g. on a dump cut short in
    /// the middle of a record. Malformed or unsupported records are skipped instead.
    ///
    /// ## Occurs during:
    ///  - Reading MRT records from an opened file
    ///  - Building the update tables from an entry stream
    #[error("failed to read decoded entries: {0}")]
    StreamRead(String),
    /// The input could not be opened at all: missing local file, unreachable remote file or an
    /// unknown compression format.
    ///
    /// ## Occurs during:
    ///  - Opening an MRT file
    #[error("unable to open {path}: {reason}")]
    Open { path: String, reason: String },
    /// A general IO error triggered by a JSON reader or writer.
    ///
    /// ## Occurs during:
    ///  - Reading exported JSON entries
    ///  - Writing decoded entries to a JSON file
    #[error(transparent)]
    IoError(#[from] io::Error),
    /// This error represents a [serde_json::Error] error.
    ///
    /// ## Occurs during:
    ///  - Deserializing exported JSON entries
    ///  - Serializing decoded entries to JSON
    #[cfg(feature = "serde")]
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// A string could not be parsed as an AS path.
    ///
    /// ## Occurs during:
    ///  - Parsing an [AsPath](crate::models::AsPath) from its textual form
    #[error("invalid AS path string: {0:?}")]
    InvalidAsPath(String),
}

#[cfg(feature = "parser")]
impl From<bgpkit_parser::error::ParserError> for UpdatesError {
    fn from(value: bgpkit_parser::error::ParserError) -> Self {
        UpdatesError::StreamRead(value.to_string())
    }
}

impl From<std::convert::Infallible> for UpdatesError {
    fn from(value: std::convert::Infallible) -> Self {
        match value {}
    }
}
