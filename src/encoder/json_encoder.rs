use crate::error::UpdatesError;
use crate::models::DecodedEntry;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Collects decoded entries and writes them out as one pretty-printed JSON array.
#[derive(Debug, Default)]
pub struct JsonEntryEncoder {
    cached_entries: Vec<DecodedEntry>,
}

impl JsonEntryEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.cached_entries.clear();
    }

    pub fn process_entry(&mut self, entry: &DecodedEntry) {
        self.cached_entries.push(entry.clone());
    }

    pub fn num_entries(&self) -> usize {
        self.cached_entries.len()
    }

    /// Writes all cached entries to `writer` and clears the cache.
    pub fn export_to_writer<W: Write>(&mut self, writer: W) -> Result<(), UpdatesError> {
        serde_json::to_writer_pretty(writer, &self.cached_entries)?;
        self.reset();
        Ok(())
    }

    /// Returns all cached entries as a JSON string and clears the cache.
    pub fn export_string(&mut self) -> Result<String, UpdatesError> {
        let output = serde_json::to_string_pretty(&self.cached_entries)?;
        self.reset();
        Ok(output)
    }
}

/// Drains an entry stream into a JSON file at `path`, returning the number of entries written.
///
/// A stream error aborts the export before anything is written.
pub fn export_entries_to_file<I, E, P>(stream: I, path: P) -> Result<usize, UpdatesError>
where
    I: IntoIterator<Item = Result<DecodedEntry, E>>,
    E: Into<UpdatesError>,
    P: AsRef<Path>,
{
    let mut encoder = JsonEntryEncoder::new();
    for entry in stream {
        encoder.process_entry(&entry.map_err(Into::into)?);
    }
    let count = encoder.num_entries();

    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    encoder.export_to_writer(&mut writer)?;
    writer.flush()?;
    info!("exported {} entries to {}", count, path.as_ref().display());
    Ok(count)
}
