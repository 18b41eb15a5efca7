use crate::books::domain::model::{starts_with_digit, BookEntry};
use crate::catalog::domain::Catalog;
use crate::core::library::GroupType;
use crate::grouping::{GroupMap, GroupingStrategy};

pub const DIGIT_GROUP: &str = "[0-9]";

// Groups A to Z by the upper-cased first character of the title, then one
// group for every title starting with a digit.
#[derive(Debug, Default)]
pub struct TitleGrouping {}

impl TitleGrouping {
    pub fn new() -> Self {
        Self {}
    }

    pub fn group_labels() -> Vec<String> {
        ('A'..='Z').map(|c| c.to_string())
            .chain(std::iter::once(DIGIT_GROUP.to_string()))
            .collect()
    }
}

fn belongs_to(book: &BookEntry, label: &str) -> bool {
    if label == DIGIT_GROUP {
        return starts_with_digit(book.title());
    }
    book.title().chars().next()
        .map_or(false, |c| c.to_uppercase().eq(label.chars()))
}

impl GroupingStrategy for TitleGrouping {
    fn group_type(&self) -> GroupType {
        GroupType::Title
    }

    fn construct_groups<'a>(&self, catalog: &'a Catalog) -> GroupMap<'a> {
        let mut groups = GroupMap::new();
        for label in TitleGrouping::group_labels() {
            let books = catalog.books().iter()
                .filter(|b| belongs_to(b, label.as_str()))
                .collect();
            groups.insert(label.as_str(), books);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntry;
    use crate::catalog::domain::Catalog;
    use crate::grouping::title_grouping::{TitleGrouping, DIGIT_GROUP};
    use crate::grouping::GroupingStrategy;

    fn catalog(titles: &[&str]) -> Catalog {
        Catalog::from_books(titles.iter()
            .map(|t| BookEntry::new(t, &["Jane Doe"], 3.0, "isbn", 10).unwrap())
            .collect())
    }

    fn group_titles<'a>(groups: &'a crate::grouping::GroupMap, label: &str) -> Vec<&'a str> {
        groups.get(label).unwrap_or(&[]).iter().map(|b| b.title()).collect()
    }

    #[test]
    fn test_should_build_all_labels_in_order() {
        let catalog = catalog(&[]);
        let groups = TitleGrouping::new().construct_groups(&catalog);
        assert_eq!(27, groups.len());
        assert_eq!(Some(&"A"), groups.labels().first());
        assert_eq!(Some(&DIGIT_GROUP), groups.labels().last());
    }

    #[test]
    fn test_should_group_case_insensitively_and_digits_together() {
        let catalog = catalog(&["apple", "0wl", "Apple", "1984", "banana", "#hashtag"]);
        let groups = TitleGrouping::new().construct_groups(&catalog);
        assert_eq!(vec!["apple", "Apple"], group_titles(&groups, "A"));
        assert_eq!(vec!["banana"], group_titles(&groups, "B"));
        assert_eq!(vec!["0wl", "1984"], group_titles(&groups, DIGIT_GROUP));
        let grouped: usize = groups.iter().map(|(_, books)| books.len()).sum();
        assert_eq!(5, grouped);
    }
}
