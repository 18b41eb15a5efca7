pub mod list_view;
pub mod search_view;
