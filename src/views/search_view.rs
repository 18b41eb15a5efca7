use crate::catalog::domain::Catalog;

// SearchExecutor finds titles containing a term, ignoring case, in catalog order.
pub struct SearchExecutor<'a> {
    catalog: &'a Catalog,
}

impl<'a> SearchExecutor<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
        }
    }

    pub fn search(&self, term: &str) -> Vec<&'a str> {
        let term = term.to_lowercase();
        self.catalog.books().iter()
            .map(|b| b.title())
            .filter(|title| title.to_lowercase().contains(term.as_str()))
            .collect()
    }
}
