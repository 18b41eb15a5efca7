use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;
use crate::books::repository::LineReader;
use crate::core::library::{LibraryError, LibraryResult};

#[derive(Debug, Default)]
pub struct FileLineReader {}

impl FileLineReader {
    pub fn new() -> Self {
        Self {}
    }
}

impl LineReader for FileLineReader {
    fn read_lines(&self, path: &Path) -> LibraryResult<Vec<String>> {
        let file = File::open(path).map_err(|err| LibraryError::io(
            format!("cannot open {}: {}", path.display(), err).as_str(), Some(format!("{:?}", err.kind()))))?;
        let lines = BufReader::new(file).lines().collect::<Result<Vec<String>, _>>()?;
        debug!("read {} lines from {}", lines.len(), path.display());
        Ok(lines)
    }
}
