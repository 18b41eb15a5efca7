use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

pub const EMPTY_LIBRARY: &str = "The library has no book entries.";

// Configuration abstracts the shared constants used by commands, the record
// parser and the group display.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Configuration {
    pub empty_library_message: String,
    pub group_prefix: String,
    pub group_indent: String,
    pub field_separator: String,
    pub author_separator: String,
    pub data_file_suffix: String,
    pub prompt: String,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            empty_library_message: EMPTY_LIBRARY.to_string(),
            group_prefix: "## ".to_string(),
            group_indent: "    ".to_string(),
            field_separator: ",".to_string(),
            author_separator: "-".to_string(),
            data_file_suffix: ".csv".to_string(),
            prompt: "> ".to_string(),
        }
    }

    pub fn from_json(json: &str) -> LibraryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> LibraryResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Configuration::from_json(json.as_str())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
