use tracing::warn;
use crate::books::domain::model::BookEntry;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

const TITLE_INDEX: usize = 0;
const AUTHORS_INDEX: usize = 1;
const RATING_INDEX: usize = 2;
const ISBN_INDEX: usize = 3;
const PAGES_INDEX: usize = 4;
const FIELD_COUNT: usize = 5;

// RecordParser turns the lines of a data file into book entries. The first
// line is a header and never parsed.
pub struct RecordParser {
    field_separator: String,
    author_separator: String,
}

// ParsedRecords keeps the entries together with the data lines that were skipped.
#[derive(Debug, Default)]
pub struct ParsedRecords {
    pub books: Vec<BookEntry>,
    pub skipped_lines: Vec<usize>,
}

impl RecordParser {
    pub fn new(config: &Configuration) -> Self {
        Self {
            field_separator: config.field_separator.to_string(),
            author_separator: config.author_separator.to_string(),
        }
    }

    // Lines with a blank or missing field are skipped. Anything else that
    // cannot become a book entry fails the whole parse.
    pub fn parse(&self, lines: &[String]) -> LibraryResult<ParsedRecords> {
        let mut parsed = ParsedRecords::default();
        for (index, line) in lines.iter().enumerate().skip(1) {
            let line_number = index + 1;
            let fields: Vec<&str> = line.split(self.field_separator.as_str()).collect();
            if is_blank_record(&fields) {
                warn!("skipping line {} with blank or missing fields", line_number);
                parsed.skipped_lines.push(line_number);
                continue;
            }
            let book = self.create_entry(&fields).map_err(|err| err.at_line(line_number))?;
            parsed.books.push(book);
        }
        Ok(parsed)
    }

    fn create_entry(&self, fields: &[&str]) -> LibraryResult<BookEntry> {
        let authors = fields[AUTHORS_INDEX]
            .split(self.author_separator.as_str())
            .map(str::to_string)
            .collect();
        let rating = fields[RATING_INDEX].trim().parse::<f32>().map_err(|err| LibraryError::malformed_record(
            format!("rating {:?} is not a number: {}", fields[RATING_INDEX], err).as_str(), None))?;
        let pages = fields[PAGES_INDEX].trim().parse::<i64>().map_err(|err| LibraryError::malformed_record(
            format!("pages {:?} is not a whole number: {}", fields[PAGES_INDEX], err).as_str(), None))?;
        BookEntry::build(fields[TITLE_INDEX].to_string(), authors, rating, fields[ISBN_INDEX].to_string(), pages)
    }
}

fn is_blank_record(fields: &[&str]) -> bool {
    fields.len() < FIELD_COUNT || fields.iter().any(|f| f.trim().is_empty())
}
