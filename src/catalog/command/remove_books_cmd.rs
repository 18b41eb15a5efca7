use crate::catalog::domain::Catalog;
use crate::core::command::{require_argument, require_catalog, Command, CommandError, CommandResponse};
use crate::core::library::{CommandType, RemoveType};
use crate::removal::factory::create_removal_strategy;

// RemoveBooksCommand expects "<AUTHOR|TITLE> <value>". The value is everything
// after the first space and keeps its inner spaces.
pub struct RemoveBooksCommand {
    remove_type: RemoveType,
    value: String,
}

impl RemoveBooksCommand {
    pub fn new(argument: Option<&str>) -> Result<Self, CommandError> {
        let argument = require_argument(CommandType::Remove, argument)?.trim();
        let (type_token, value) = argument.split_once(' ')
            .ok_or_else(|| CommandError::invalid_argument(CommandType::Remove, argument))?;
        if value.is_empty() {
            return Err(CommandError::invalid_argument(CommandType::Remove, argument));
        }
        let remove_type = RemoveType::parse(type_token)
            .ok_or_else(|| CommandError::invalid_argument(CommandType::Remove, argument))?;
        Ok(Self {
            remove_type,
            value: value.to_string(),
        })
    }

    pub fn remove_type(&self) -> RemoveType {
        self.remove_type
    }

    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl Command for RemoveBooksCommand {
    fn command_type(&self) -> CommandType {
        CommandType::Remove
    }

    fn execute(&self, catalog: Option<&mut Catalog>) -> Result<CommandResponse, CommandError> {
        let catalog = require_catalog(CommandType::Remove, catalog)?;
        let mut strategy = create_removal_strategy(self.remove_type, self.value.as_str());
        strategy.remove(catalog);
        Ok(CommandResponse::new(strategy.report()))
    }
}
