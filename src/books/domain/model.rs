use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use crate::books::domain::constraint::book_validity_check;
use crate::core::library::LibraryResult;

// BookEntry abstracts one catalog entry. It is validated once at construction
// and never changes afterwards.
#[derive(Debug, Clone)]
pub struct BookEntry {
    title: String,
    authors: Vec<String>,
    rating: f32,
    isbn: String,
    pages: u32,
}

impl BookEntry {
    pub fn new(title: &str, authors: &[&str], rating: f32, isbn: &str, pages: i64) -> LibraryResult<Self> {
        let authors: Vec<String> = authors.iter().map(|a| a.to_string()).collect();
        Self::build(title.to_string(), authors, rating, isbn.to_string(), pages)
    }

    pub(crate) fn build(title: String, authors: Vec<String>, rating: f32,
                        isbn: String, pages: i64) -> LibraryResult<Self> {
        book_validity_check(title.as_str(), &authors, rating, isbn.as_str(), pages)?;
        Ok(Self {
            title,
            authors,
            rating,
            isbn,
            pages: pages as u32,
        })
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    pub fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn has_author(&self, author: &str) -> bool {
        self.authors.iter().any(|a| a == author)
    }

    // Orders by upper-cased title, except that a title starting with a digit
    // always sorts after one that does not.
    pub fn cmp_by_title(&self, other: &BookEntry) -> Ordering {
        let title = self.title.to_uppercase();
        let other_title = other.title.to_uppercase();
        match (starts_with_digit(title.as_str()), starts_with_digit(other_title.as_str())) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => title.cmp(&other_title),
        }
    }
}

pub(crate) fn starts_with_digit(title: &str) -> bool {
    title.chars().next().map_or(false, |c| c.is_ascii_digit())
}

impl PartialEq for BookEntry {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title &&
            self.authors == other.authors &&
            self.rating.to_bits() == other.rating.to_bits() &&
            self.isbn == other.isbn &&
            self.pages == other.pages
    }
}

impl Eq for BookEntry {}

impl Hash for BookEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.authors.hash(state);
        self.rating.to_bits().hash(state);
        self.isbn.hash(state);
        self.pages.hash(state);
    }
}

impl Display for BookEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nby {}\nRating: {:.2}\nISBN: {}\n{} pages",
               self.title, self.authors.join(", "), self.rating, self.isbn, self.pages)
    }
}
