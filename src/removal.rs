pub mod author_removal;
pub mod factory;
pub mod title_removal;

use crate::books::domain::model::BookEntry;
use crate::catalog::domain::Catalog;
use crate::core::library::RemoveType;

// RemovalStrategy deletes matching entries from the catalog in a single
// forward pass and remembers what it removed for the report.
pub trait RemovalStrategy {
    fn remove_type(&self) -> RemoveType;
    fn target(&self) -> &str;
    fn remove(&mut self, catalog: &mut Catalog);
    fn removed_books(&self) -> &[BookEntry];
    fn report(&self) -> String;
}
