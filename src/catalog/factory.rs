use tracing::debug;
use crate::catalog::command::add_books_cmd::AddBooksCommand;
use crate::catalog::command::group_books_cmd::GroupBooksCommand;
use crate::catalog::command::list_books_cmd::ListBooksCommand;
use crate::catalog::command::remove_books_cmd::RemoveBooksCommand;
use crate::catalog::command::search_books_cmd::SearchBooksCommand;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::CommandType;

// Builds the command for a type tag from its raw argument. HELP and EXIT are
// handled by the console session and have no command object.
pub fn create_command(config: &Configuration, command_type: CommandType,
                      argument: Option<&str>) -> Result<Box<dyn Command>, CommandError> {
    debug!("creating {} command with argument {:?}", command_type, argument);
    match command_type {
        CommandType::Add => Ok(Box::new(AddBooksCommand::new(config, argument)?)),
        CommandType::List => Ok(Box::new(ListBooksCommand::new(config, argument)?)),
        CommandType::Group => Ok(Box::new(GroupBooksCommand::new(config, argument)?)),
        CommandType::Search => Ok(Box::new(SearchBooksCommand::new(argument)?)),
        CommandType::Remove => Ok(Box::new(RemoveBooksCommand::new(argument)?)),
        CommandType::Help | CommandType::Exit => Err(CommandError::InvalidArgument {
            message: format!("{} is handled by the console and is not a catalog command", command_type),
            reason_code: Some(command_type.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use crate::books::domain::model::BookEntry;
    use crate::catalog::domain::Catalog;
    use crate::catalog::factory::create_command;
    use crate::core::command::CommandError;
    use crate::core::domain::Configuration;
    use crate::core::library::CommandType;

    lazy_static! {
        static ref CONFIG: Configuration = Configuration::new();
    }

    #[test]
    fn test_should_create_each_catalog_command() {
        let cases = [
            (CommandType::Add, "books.csv"),
            (CommandType::List, "long"),
            (CommandType::Group, "AUTHOR"),
            (CommandType::Search, "dune"),
            (CommandType::Remove, "TITLE Dune"),
        ];
        for (command_type, argument) in cases {
            let cmd = create_command(&CONFIG, command_type, Some(argument)).expect("should create command");
            assert_eq!(command_type, cmd.command_type());
        }
    }

    #[test]
    fn test_should_reject_absent_and_invalid_arguments() {
        for command_type in [CommandType::Add, CommandType::List, CommandType::Group, CommandType::Search, CommandType::Remove] {
            assert!(matches!(create_command(&CONFIG, command_type, None), Err(CommandError::InvalidArgument { .. })));
        }
        assert!(create_command(&CONFIG, CommandType::List, Some("LONG")).is_err());
        assert!(create_command(&CONFIG, CommandType::Help, Some("")).is_err());
    }

    #[test]
    fn test_should_run_commands_against_one_catalog() {
        let mut catalog = Catalog::from_books(vec![
            BookEntry::new("Dune", &["Frank Herbert"], 4.2, "d", 412).unwrap(),
            BookEntry::new("Emma", &["Jane Austen"], 4.0, "e", 320).unwrap(),
        ]);
        let removed = create_command(&CONFIG, CommandType::Remove, Some("AUTHOR Jane Austen")).unwrap()
            .execute(Some(&mut catalog)).expect("should remove");
        assert_eq!("1 books removed for author: Jane Austen", removed.output.as_str());
        let listed = create_command(&CONFIG, CommandType::List, Some("")).unwrap()
            .execute(Some(&mut catalog)).expect("should list");
        assert_eq!("1 books in library:\nDune", listed.output.as_str());
    }
}
