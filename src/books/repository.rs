pub mod file_line_reader;

use std::path::Path;
use crate::core::library::LibraryResult;

// LineReader abstracts the source of book data as an ordered sequence of text lines.
pub trait LineReader {
    // reads all lines, in order, with line terminators stripped
    fn read_lines(&self, path: &Path) -> LibraryResult<Vec<String>>;
}
