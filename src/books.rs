pub mod domain;
pub mod factory;
pub mod parser;
pub mod repository;
