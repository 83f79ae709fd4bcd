use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One current or historical password of a credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordRecord {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub password: String,
    #[serde(default)]
    pub changed_on: Option<NaiveDate>,
}

impl PasswordRecord {
    pub fn new(id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            password: password.into(),
            changed_on: None,
        }
    }

    /// The label if set, otherwise the id.
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// Parses a JSON array of records.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<PasswordRecord>, RecordsError> {
    Ok(serde_json::from_reader(reader)?)
}

/// One password per line; ids are `line-N` (1-based). Blank lines are skipped
/// and a trailing `\r` is dropped.
pub fn read_lines<R: Read>(mut reader: R) -> Result<Vec<PasswordRecord>, RecordsError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    Ok(content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, line)| PasswordRecord::new(format!("line-{}", idx + 1), line))
        .collect())
}
