pub mod books;
pub mod catalog;
pub mod console;
pub mod core;
pub mod grouping;
pub mod removal;
pub mod utils;
pub mod views;
