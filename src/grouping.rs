pub mod author_grouping;
pub mod factory;
pub mod title_grouping;

use crate::books::domain::model::BookEntry;
use crate::catalog::domain::Catalog;
use crate::core::domain::Configuration;
use crate::core::library::GroupType;

// GroupMap keeps groups in the order the strategy created them. The entries
// are borrowed from the catalog the groups were built from.
#[derive(Debug, Default, PartialEq)]
pub struct GroupMap<'a> {
    groups: Vec<(String, Vec<&'a BookEntry>)>,
}

impl<'a> GroupMap<'a> {
    pub fn new() -> Self {
        Self { groups: vec![] }
    }

    pub fn insert(&mut self, label: &str, books: Vec<&'a BookEntry>) {
        match self.groups.iter_mut().find(|(existing, _)| existing == label) {
            Some((_, existing)) => *existing = books,
            None => self.groups.push((label.to_string(), books)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[&'a BookEntry]> {
        self.groups.iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, books)| books.as_slice())
    }

    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item=(&str, &[&'a BookEntry])> {
        self.groups.iter().map(|(label, books)| (label.as_str(), books.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub trait GroupingStrategy {
    fn group_type(&self) -> GroupType;
    fn construct_groups<'a>(&self, catalog: &'a Catalog) -> GroupMap<'a>;
}

// Renders the non-empty groups under a "Grouped data by" header.
pub fn render_groups(config: &Configuration, group_type: GroupType, groups: &GroupMap) -> String {
    let mut display = format!("Grouped data by {}", group_type);
    for (label, books) in groups.iter().filter(|(_, books)| !books.is_empty()) {
        display.push('\n');
        display.push_str(config.group_prefix.as_str());
        display.push_str(label);
        for book in books {
            display.push('\n');
            display.push_str(config.group_indent.as_str());
            display.push_str(book.title());
        }
    }
    display
}
