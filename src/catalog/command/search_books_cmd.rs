use crate::catalog::domain::Catalog;
use crate::core::command::{require_argument, require_catalog, Command, CommandError, CommandResponse};
use crate::core::library::CommandType;
use crate::views::search_view::SearchExecutor;

// SearchBooksCommand takes a single word and lists every title containing it.
pub struct SearchBooksCommand {
    term: String,
}

impl SearchBooksCommand {
    pub fn new(argument: Option<&str>) -> Result<Self, CommandError> {
        let argument = require_argument(CommandType::Search, argument)?.trim();
        if argument.is_empty() || argument.contains(' ') {
            return Err(CommandError::invalid_argument(CommandType::Search, argument));
        }
        Ok(Self {
            term: argument.to_string(),
        })
    }

    pub fn term(&self) -> &str {
        self.term.as_str()
    }
}

impl Command for SearchBooksCommand {
    fn command_type(&self) -> CommandType {
        CommandType::Search
    }

    fn execute(&self, catalog: Option<&mut Catalog>) -> Result<CommandResponse, CommandError> {
        let catalog = require_catalog(CommandType::Search, catalog)?;
        let hits = SearchExecutor::new(catalog).search(self.term.as_str());
        if hits.is_empty() {
            return Ok(CommandResponse::new(format!("No hits found for search term: {}", self.term)));
        }
        Ok(CommandResponse::new(hits.join("\n")))
    }
}
