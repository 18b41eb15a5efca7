use tracing::debug;
use crate::catalog::domain::Catalog;
use crate::core::command::{require_argument, require_catalog, Command, CommandError, CommandResponse};
use crate::core::domain::Configuration;
use crate::core::library::{CommandType, ListType};
use crate::views::list_view::ListBuilder;

pub struct ListBooksCommand {
    config: Configuration,
    list_type: ListType,
}

impl ListBooksCommand {
    // An empty argument means a short list; "short" and "long" must be lower case.
    pub fn new(config: &Configuration, argument: Option<&str>) -> Result<Self, CommandError> {
        let argument = require_argument(CommandType::List, argument)?.trim();
        let list_type = if argument.is_empty() {
            ListType::Short
        } else {
            ListType::parse(argument)
                .ok_or_else(|| CommandError::invalid_argument(CommandType::List, argument))?
        };
        Ok(Self {
            config: config.clone(),
            list_type,
        })
    }

    pub fn list_type(&self) -> ListType {
        self.list_type
    }
}

impl Command for ListBooksCommand {
    fn command_type(&self) -> CommandType {
        CommandType::List
    }

    fn execute(&self, catalog: Option<&mut Catalog>) -> Result<CommandResponse, CommandError> {
        let catalog = require_catalog(CommandType::List, catalog)?;
        if catalog.is_empty() {
            return Ok(CommandResponse::new(self.config.empty_library_message.to_string()));
        }
        debug!("listing {} books as {}", catalog.len(), self.list_type);
        Ok(CommandResponse::new(ListBuilder::new(catalog, self.list_type).construct_list()))
    }
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use crate::books::domain::model::BookEntry;
    use crate::catalog::command::list_books_cmd::ListBooksCommand;
    use crate::catalog::domain::Catalog;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::{Configuration, EMPTY_LIBRARY};
    use crate::core::library::ListType;

    lazy_static! {
        static ref CONFIG: Configuration = Configuration::new();
    }

    #[test]
    fn test_should_parse_list_arguments() {
        assert_eq!(ListType::Short, ListBooksCommand::new(&CONFIG, Some("")).unwrap().list_type());
        assert_eq!(ListType::Short, ListBooksCommand::new(&CONFIG, Some("   ")).unwrap().list_type());
        assert_eq!(ListType::Short, ListBooksCommand::new(&CONFIG, Some("short")).unwrap().list_type());
        assert_eq!(ListType::Long, ListBooksCommand::new(&CONFIG, Some(" long ")).unwrap().list_type());
        assert!(matches!(ListBooksCommand::new(&CONFIG, Some("LONG")), Err(CommandError::InvalidArgument { .. })));
        assert!(ListBooksCommand::new(&CONFIG, Some("Short")).is_err());
        assert!(ListBooksCommand::new(&CONFIG, Some("short long")).is_err());
        assert!(ListBooksCommand::new(&CONFIG, None).is_err());
    }

    #[test]
    fn test_should_print_empty_library() {
        let cmd = ListBooksCommand::new(&CONFIG, Some("long")).unwrap();
        let mut catalog = Catalog::new();
        let res = cmd.execute(Some(&mut catalog)).expect("should list");
        assert_eq!(EMPTY_LIBRARY, res.output.as_str());
    }

    #[test]
    fn test_should_list_short_and_long() {
        let mut catalog = Catalog::from_books(vec![
            BookEntry::new("Dune", &["Frank Herbert"], 4.2, "9780441013593", 412).unwrap(),
        ]);
        let short = ListBooksCommand::new(&CONFIG, Some("short")).unwrap()
            .execute(Some(&mut catalog)).expect("should list");
        assert_eq!(vec!["1 books in library:", "Dune"], short.output.lines().collect::<Vec<_>>());

        let long = ListBooksCommand::new(&CONFIG, Some("long")).unwrap()
            .execute(Some(&mut catalog)).expect("should list");
        assert_eq!(vec!["1 books in library:", "Dune", "by Frank Herbert", "Rating: 4.20", "ISBN: 9780441013593", "412 pages"],
                   long.output.lines().collect::<Vec<_>>());
    }

    #[test]
    fn test_should_require_catalog() {
        let cmd = ListBooksCommand::new(&CONFIG, Some("")).unwrap();
        assert!(matches!(cmd.execute(None), Err(CommandError::InvalidArgument { .. })));
    }
}
