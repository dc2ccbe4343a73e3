//! Word lists
//!
//! One file per topic, each row `word|hint` with no header and no escaping.
//! A `|` inside a word or hint is not supported.

use crate::error::AssetError;
use log::warn;
use std::fs;
use std::path::Path;

/// Delimiter used by the shipped word list files
pub const WORD_DELIMITER: char = '|';

/// A word to guess and the hint shown for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Self {
        WordEntry {
            word: word.into(),
            hint: hint.into(),
        }
    }
}

/// Split delimited text into rows of fields
///
/// Line endings (`\n` or `\r\n`) are stripped and blank lines skipped with
/// a warning. Fields are kept verbatim, surrounding spaces included.
pub fn parse_delimited(content: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            warn!("Skipping blank line {}", index + 1);
            continue;
        }
        rows.push(line.split(delimiter).map(str::to_string).collect());
    }

    rows
}

/// Read a whole delimited file
pub fn read_delimited_table(path: &Path, delimiter: char) -> Result<Vec<Vec<String>>, AssetError> {
    let content = fs::read_to_string(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_delimited(&content, delimiter))
}

/// Turn table rows into word entries for `topic`
///
/// Every row must have exactly two fields and the topic must end up with at
/// least one word.
pub fn entries_from_rows(topic: &str, rows: Vec<Vec<String>>) -> Result<Vec<WordEntry>, AssetError> {
    let mut entries = Vec::with_capacity(rows.len());

    for (index, row) in rows.into_iter().enumerate() {
        let fields = row.len();
        let mut fields_iter = row.into_iter();

        match (fields_iter.next(), fields_iter.next(), fields_iter.next()) {
            (Some(word), Some(hint), None) => {
                if word.is_empty() {
                    warn!("Skipping empty word in '{}' row {}", topic, index + 1);
                    continue;
                }
                entries.push(WordEntry::new(word, hint));
            }
            _ => {
                return Err(AssetError::MalformedRow {
                    topic: topic.to_string(),
                    row: index + 1,
                    fields,
                });
            }
        }
    }

    if entries.is_empty() {
        return Err(AssetError::EmptyWordList(topic.to_string()));
    }

    Ok(entries)
}
