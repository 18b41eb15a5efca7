use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;
use crate::books::domain::model::BookEntry;
use crate::books::parser::RecordParser;
use crate::books::repository::LineReader;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

// Catalog owns the loaded book entries in load order. Entries are appended by
// loading data files and otherwise only ever removed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    books: Vec<BookEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { books: vec![] }
    }

    pub fn from_books(books: Vec<BookEntry>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[BookEntry] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    // distinct author names in byte-wise order, so upper case sorts before lower case
    pub fn authors(&self) -> BTreeSet<String> {
        self.books.iter()
            .flat_map(|b| b.authors().iter().cloned())
            .collect()
    }

    // Reads and parses the whole file before touching the catalog, so a failed
    // load leaves it unchanged. Returns the number of entries added.
    pub fn load_data(&mut self, path: &Path, reader: &dyn LineReader,
                     config: &Configuration) -> LibraryResult<usize> {
        let lines = reader.read_lines(path)?;
        let parsed = RecordParser::new(config).parse(&lines)?;
        let added = parsed.books.len();
        self.books.extend(parsed.books);
        info!("loaded {} books from {} ({} lines skipped), catalog has {} books",
            added, path.display(), parsed.skipped_lines.len(), self.books.len());
        Ok(added)
    }

    pub fn cursor(&mut self) -> CatalogCursor<'_> {
        CatalogCursor { books: &mut self.books, next_index: 0, current: None }
    }
}

// CatalogCursor walks the catalog front to back once. The entry most recently
// returned by next() can be removed without skipping or revisiting others.
pub struct CatalogCursor<'a> {
    books: &'a mut Vec<BookEntry>,
    next_index: usize,
    current: Option<usize>,
}

impl<'a> CatalogCursor<'a> {
    pub fn next(&mut self) -> Option<&BookEntry> {
        if self.next_index >= self.books.len() {
            self.current = None;
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;
        self.current = Some(index);
        self.books.get(index)
    }

    // Removes the current entry; a second call before next() returns None.
    pub fn remove_current(&mut self) -> Option<BookEntry> {
        let index = self.current.take()?;
        self.next_index = index;
        Some(self.books.remove(index))
    }
}
