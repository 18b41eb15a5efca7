pub mod add_books_cmd;
pub mod group_books_cmd;
pub mod list_books_cmd;
pub mod remove_books_cmd;
pub mod search_books_cmd;
