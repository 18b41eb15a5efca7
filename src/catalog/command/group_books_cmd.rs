use tracing::debug;
use crate::catalog::domain::Catalog;
use crate::core::command::{require_argument, require_catalog, Command, CommandError, CommandResponse};
use crate::core::domain::Configuration;
use crate::core::library::{CommandType, GroupType};
use crate::grouping::factory::create_group_strategy;
use crate::grouping::render_groups;

pub struct GroupBooksCommand {
    config: Configuration,
    group_type: GroupType,
}

impl GroupBooksCommand {
    pub fn new(config: &Configuration, argument: Option<&str>) -> Result<Self, CommandError> {
        let argument = require_argument(CommandType::Group, argument)?.trim();
        let group_type = GroupType::parse(argument)
            .ok_or_else(|| CommandError::invalid_argument(CommandType::Group, argument))?;
        Ok(Self {
            config: config.clone(),
            group_type,
        })
    }

    pub fn group_type(&self) -> GroupType {
        self.group_type
    }
}

impl Command for GroupBooksCommand {
    fn command_type(&self) -> CommandType {
        CommandType::Group
    }

    fn execute(&self, catalog: Option<&mut Catalog>) -> Result<CommandResponse, CommandError> {
        let catalog = require_catalog(CommandType::Group, catalog)?;
        if catalog.is_empty() {
            return Ok(CommandResponse::new(self.config.empty_library_message.to_string()));
        }
        let strategy = create_group_strategy(self.group_type);
        let groups = strategy.construct_groups(catalog);
        debug!("built {} groups by {}", groups.len(), self.group_type);
        Ok(CommandResponse::new(render_groups(&self.config, self.group_type, &groups)))
    }
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use crate::books::domain::model::BookEntry;
    use crate::catalog::command::group_books_cmd::GroupBooksCommand;
    use crate::catalog::domain::Catalog;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::{Configuration, EMPTY_LIBRARY};
    use crate::core::library::GroupType;

    lazy_static! {
        static ref CONFIG: Configuration = Configuration::new();
        static ref BOOKS: Vec<BookEntry> = vec![
            BookEntry::new("Good Omens", &["Terry Pratchett", "Neil Gaiman"], 4.25, "0060853980", 432).unwrap(),
            BookEntry::new("1984", &["George Orwell"], 4.2, "0451524934", 328).unwrap(),
            BookEntry::new("Coraline", &["Neil Gaiman"], 4.0, "0380807343", 162).unwrap(),
            BookEntry::new("guards! guards!", &["Terry Pratchett"], 4.3, "0062225758", 416).unwrap(),
        ];
    }

    #[test]
    fn test_should_parse_group_arguments() {
        assert_eq!(GroupType::Author, GroupBooksCommand::new(&CONFIG, Some(" AUTHOR ")).unwrap().group_type());
        assert_eq!(GroupType::Title, GroupBooksCommand::new(&CONFIG, Some("TITLE")).unwrap().group_type());
        assert!(matches!(GroupBooksCommand::new(&CONFIG, Some("author")), Err(CommandError::InvalidArgument { .. })));
        assert!(GroupBooksCommand::new(&CONFIG, Some("")).is_err());
        assert!(GroupBooksCommand::new(&CONFIG, Some("TITLE AUTHOR")).is_err());
        assert!(GroupBooksCommand::new(&CONFIG, None).is_err());
    }

    #[test]
    fn test_should_print_empty_library() {
        let mut catalog = Catalog::new();
        let res = GroupBooksCommand::new(&CONFIG, Some("TITLE")).unwrap()
            .execute(Some(&mut catalog)).expect("should group");
        assert_eq!(EMPTY_LIBRARY, res.output.as_str());
    }

    #[test]
    fn test_should_group_by_title() {
        let mut catalog = Catalog::from_books(BOOKS.clone());
        let res = GroupBooksCommand::new(&CONFIG, Some("TITLE")).unwrap()
            .execute(Some(&mut catalog)).expect("should group");
        assert_eq!("Grouped data by TITLE\n## C\n    Coraline\n## G\n    Good Omens\n    guards! guards!\n## [0-9]\n    1984",
                   res.output.as_str());
    }

    #[test]
    fn test_should_group_by_author() {
        let mut catalog = Catalog::from_books(BOOKS.clone());
        let res = GroupBooksCommand::new(&CONFIG, Some("AUTHOR")).unwrap()
            .execute(Some(&mut catalog)).expect("should group");
        assert_eq!("Grouped data by AUTHOR\n## George Orwell\n    1984\n## Neil Gaiman\n    Good Omens\n    Coraline\n## Terry Pratchett\n    Good Omens\n    guards! guards!",
                   res.output.as_str());
    }

    #[test]
    fn test_should_require_catalog() {
        let cmd = GroupBooksCommand::new(&CONFIG, Some("TITLE")).unwrap();
        assert!(matches!(cmd.execute(None), Err(CommandError::InvalidArgument { .. })));
    }
}
