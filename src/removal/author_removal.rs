use tracing::info;
use crate::books::domain::model::BookEntry;
use crate::catalog::domain::Catalog;
use crate::core::library::RemoveType;
use crate::removal::RemovalStrategy;

// Removes every book that lists the author, compared case-sensitively.
pub struct AuthorRemoval {
    author: String,
    removed: Vec<BookEntry>,
}

impl AuthorRemoval {
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
            removed: vec![],
        }
    }
}

impl RemovalStrategy for AuthorRemoval {
    fn remove_type(&self) -> RemoveType {
        RemoveType::Author
    }

    fn target(&self) -> &str {
        self.author.as_str()
    }

    fn remove(&mut self, catalog: &mut Catalog) {
        let mut cursor = catalog.cursor();
        while let Some(book) = cursor.next() {
            if book.has_author(self.author.as_str()) {
                if let Some(removed) = cursor.remove_current() {
                    self.removed.push(removed);
                }
            }
        }
        info!("removed {} books for author {:?}", self.removed.len(), self.author);
    }

    fn removed_books(&self) -> &[BookEntry] {
        &self.removed
    }

    fn report(&self) -> String {
        format!("{} books removed for author: {}", self.removed.len(), self.author)
    }
}
