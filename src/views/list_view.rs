use crate::catalog::domain::Catalog;
use crate::core::library::ListType;

// ListBuilder renders the catalog as a header line followed by one entry per book.
pub struct ListBuilder<'a> {
    catalog: &'a Catalog,
    list_type: ListType,
}

impl<'a> ListBuilder<'a> {
    pub fn new(catalog: &'a Catalog, list_type: ListType) -> Self {
        Self {
            catalog,
            list_type,
        }
    }

    pub fn construct_list(&self) -> String {
        let mut list = format!("{} books in library:", self.catalog.len());
        for book in self.catalog.books() {
            match self.list_type {
                ListType::Short => {
                    list.push('\n');
                    list.push_str(book.title());
                }
                ListType::Long => {
                    list.push('\n');
                    list.push_str(book.to_string().as_str());
                    list.push('\n');
                }
            }
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntry;
    use crate::catalog::domain::Catalog;
    use crate::core::library::ListType;
    use crate::views::list_view::ListBuilder;

    fn catalog() -> Catalog {
        Catalog::from_books(vec![
            BookEntry::new("Dune", &["Frank Herbert"], 4.2, "9780441013593", 412).unwrap(),
        ])
    }

    #[test]
    fn test_should_list_titles_in_short_form() {
        let catalog = catalog();
        assert_eq!("1 books in library:\nDune", ListBuilder::new(&catalog, ListType::Short).construct_list());
    }

    #[test]
    fn test_should_list_records_in_long_form() {
        let catalog = catalog();
        assert_eq!("1 books in library:\nDune\nby Frank Herbert\nRating: 4.20\nISBN: 9780441013593\n412 pages\n",
                   ListBuilder::new(&catalog, ListType::Long).construct_list());
    }
}
