use tracing::info;
use crate::books::domain::model::BookEntry;
use crate::catalog::domain::Catalog;
use crate::core::library::RemoveType;
use crate::removal::RemovalStrategy;

// Removes the first book whose title matches exactly and stops there. Titles
// are expected to be unique, so later duplicates stay in the catalog.
pub struct TitleRemoval {
    title: String,
    removed: Vec<BookEntry>,
}

impl TitleRemoval {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            removed: vec![],
        }
    }
}

impl RemovalStrategy for TitleRemoval {
    fn remove_type(&self) -> RemoveType {
        RemoveType::Title
    }

    fn target(&self) -> &str {
        self.title.as_str()
    }

    fn remove(&mut self, catalog: &mut Catalog) {
        let mut cursor = catalog.cursor();
        while let Some(book) = cursor.next() {
            if book.title() == self.title {
                if let Some(removed) = cursor.remove_current() {
                    self.removed.push(removed);
                }
                break;
            }
        }
        info!("title {:?} removed: {}", self.title, !self.removed.is_empty());
    }

    fn removed_books(&self) -> &[BookEntry] {
        &self.removed
    }

    fn report(&self) -> String {
        if self.removed.is_empty() {
            format!("{}: not found.", self.title)
        } else {
            format!("{}: removed successfully.", self.title)
        }
    }
}
