use crate::books::repository::file_line_reader::FileLineReader;
use crate::books::repository::LineReader;

pub fn create_line_reader() -> Box<dyn LineReader> {
    Box::new(FileLineReader::new())
}
