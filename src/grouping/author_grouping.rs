use crate::catalog::domain::Catalog;
use crate::core::library::GroupType;
use crate::grouping::{GroupMap, GroupingStrategy};

// One group per distinct author, in byte-wise author order. A book written by
// several authors appears in each of their groups.
#[derive(Debug, Default)]
pub struct AuthorGrouping {}

impl AuthorGrouping {
    pub fn new() -> Self {
        Self {}
    }
}

impl GroupingStrategy for AuthorGrouping {
    fn group_type(&self) -> GroupType {
        GroupType::Author
    }

    fn construct_groups<'a>(&self, catalog: &'a Catalog) -> GroupMap<'a> {
        let mut groups = GroupMap::new();
        for author in catalog.authors() {
            let books = catalog.books().iter()
                .filter(|b| b.has_author(author.as_str()))
                .collect();
            groups.insert(author.as_str(), books);
        }
        groups
    }
}
