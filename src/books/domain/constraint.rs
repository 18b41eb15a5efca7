use crate::core::library::{LibraryError, LibraryResult};

const MIN_RATING: f32 = 0.0;
const MAX_RATING: f32 = 5.0;
const MIN_PAGES: i64 = 0;

// Checks every field invariant of a book entry; the first violation wins.
pub(crate) fn book_validity_check(title: &str, authors: &[String], rating: f32,
                                  isbn: &str, pages: i64) -> LibraryResult<()> {
    title_validity_check(title)?;
    authors_validity_check(authors)?;
    rating_validity_check(rating)?;
    isbn_validity_check(isbn)?;
    pages_validity_check(pages)
}

fn title_validity_check(title: &str) -> LibraryResult<()> {
    if title.is_empty() {
        return Err(LibraryError::malformed_record("the title of the book cannot be empty", None));
    }
    Ok(())
}

fn authors_validity_check(authors: &[String]) -> LibraryResult<()> {
    if authors.is_empty() {
        return Err(LibraryError::malformed_record("a book needs at least one author", None));
    }
    if authors.iter().any(|a| a.is_empty()) {
        return Err(LibraryError::malformed_record("the authors of the book cannot be empty", None));
    }
    Ok(())
}

fn rating_validity_check(rating: f32) -> LibraryResult<()> {
    // NaN fails both comparisons
    if !(rating >= MIN_RATING && rating <= MAX_RATING) {
        return Err(LibraryError::malformed_record(
            format!("the rating must be between {} and {}, got {}", MIN_RATING, MAX_RATING, rating).as_str(), None));
    }
    Ok(())
}

fn isbn_validity_check(isbn: &str) -> LibraryResult<()> {
    if isbn.is_empty() {
        return Err(LibraryError::malformed_record("the ISBN of the book cannot be empty", None));
    }
    Ok(())
}

fn pages_validity_check(pages: i64) -> LibraryResult<()> {
    if pages < MIN_PAGES || pages > u32::MAX as i64 {
        return Err(LibraryError::malformed_record(
            format!("the number of pages cannot be {}", pages).as_str(), None));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::books::domain::constraint::book_validity_check;
    use crate::core::library::LibraryError;

    fn authors() -> Vec<String> {
        vec!["Jane Doe".to_string()]
    }

    #[test]
    fn test_should_accept_valid_fields() {
        assert!(book_validity_check("Dune", &authors(), 4.2, "isbn", 412).is_ok());
        assert!(book_validity_check("Dune", &authors(), 4.2, "isbn", 0).is_ok());
    }

    #[test]
    fn test_should_reject_empty_title_and_authors() {
        assert!(matches!(book_validity_check("", &authors(), 1.0, "isbn", 1), Err(LibraryError::MalformedRecord { .. })));
        assert!(book_validity_check("Dune", &[], 1.0, "isbn", 1).is_err());
        assert!(book_validity_check("Dune", &["A".to_string(), "".to_string()], 1.0, "isbn", 1).is_err());
    }

    #[test]
    fn test_should_check_rating_bounds() {
        assert!(book_validity_check("Dune", &authors(), 0.0, "isbn", 1).is_ok());
        assert!(book_validity_check("Dune", &authors(), 5.0, "isbn", 1).is_ok());
        assert!(book_validity_check("Dune", &authors(), 5.0001, "isbn", 1).is_err());
        assert!(book_validity_check("Dune", &authors(), -0.0001, "isbn", 1).is_err());
        assert!(book_validity_check("Dune", &authors(), f32::NAN, "isbn", 1).is_err());
    }

    #[test]
    fn test_should_reject_negative_pages_and_empty_isbn() {
        assert!(book_validity_check("Dune", &authors(), 1.0, "isbn", -1).is_err());
        assert!(book_validity_check("Dune", &authors(), 1.0, "", 1).is_err());
    }
}
