use crate::error::UpdatesError;
use crate::models::DecodedEntry;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Decoded entries read back from a JSON array written by
/// [JsonEntryEncoder](crate::encoder::JsonEntryEncoder).
///
/// The whole array is parsed up front, so a malformed file fails on [JsonEntryReader::open]
/// rather than halfway through a build.
#[derive(Debug)]
pub struct JsonEntryReader {
    entries: std::vec::IntoIter<DecodedEntry>,
}

impl JsonEntryReader {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, UpdatesError> {
        let entries: Vec<DecodedEntry> = serde_json::from_reader(reader)?;
        Ok(JsonEntryReader {
            entries: entries.into_iter(),
        })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, UpdatesError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| UpdatesError::Open {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_reader(BufReader::new(file))
    }
}

impl Iterator for JsonEntryReader {
    type Item = Result<DecodedEntry, UpdatesError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(Ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}
