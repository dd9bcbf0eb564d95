//! Catalogue loading from the `title | id | tags` text format
//!
//! One video per line. Fields are trimmed; tags are comma-separated and
//! individually trimmed. Blank lines are skipped.

use super::Catalogue;
use crate::error::{Result, StorageError};
use reel_core::{VideoId, VideoRecord};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const FIELD_DELIMITER: char = '|';
const TAG_DELIMITER: char = ',';

impl Catalogue {
    /// Build a catalogue from `(title, id, tags)` triples
    pub fn from_entries<T, I>(entries: impl IntoIterator<Item = (T, I, Vec<String>)>) -> Self
    where
        T: Into<String>,
        I: Into<String>,
    {
        Self::from_records(
            entries
                .into_iter()
                .map(|(title, id, tags)| VideoRecord::new(VideoId::new(id), title, tags)),
        )
    }

    /// Parse a catalogue from any buffered reader
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(record) = parse_record(index + 1, &line)? {
                records.push(record);
            }
        }
        tracing::debug!(count = records.len(), "parsed catalogue records");
        Ok(Self::from_records(records))
    }

    /// Load a catalogue file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let catalogue = Self::from_reader(BufReader::new(file))?;
        tracing::info!(path = %path.display(), videos = catalogue.len(), "catalogue loaded");
        Ok(catalogue)
    }
}

/// Parse one catalogue line; `None` for blank lines
fn parse_record(line_number: usize, line: &str) -> Result<Option<VideoRecord>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    let [title, id, tags] = fields[..] else {
        return Err(StorageError::malformed(line_number, fields.len()));
    };

    Ok(Some(VideoRecord::new(
        VideoId::new(id),
        title,
        parse_tags(tags),
    )))
}

fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(TAG_DELIMITER)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
