use std::path::PathBuf;
use tracing::debug;
use crate::books::factory::create_line_reader;
use crate::books::repository::LineReader;
use crate::catalog::domain::Catalog;
use crate::core::command::{require_argument, require_catalog, Command, CommandError, CommandResponse};
use crate::core::domain::Configuration;
use crate::core::library::CommandType;

// AddBooksCommand loads a data file and appends its books to the catalog.
pub struct AddBooksCommand {
    config: Configuration,
    path: PathBuf,
    reader: Box<dyn LineReader>,
}

impl AddBooksCommand {
    pub fn new(config: &Configuration, argument: Option<&str>) -> Result<Self, CommandError> {
        Self::with_reader(config, argument, create_line_reader())
    }

    pub fn with_reader(config: &Configuration, argument: Option<&str>,
                       reader: Box<dyn LineReader>) -> Result<Self, CommandError> {
        let argument = require_argument(CommandType::Add, argument)?.trim();
        // the suffix comparison is case-sensitive
        if !argument.ends_with(config.data_file_suffix.as_str()) {
            return Err(CommandError::invalid_argument(CommandType::Add, argument));
        }
        Ok(Self {
            config: config.clone(),
            path: PathBuf::from(argument),
            reader,
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Command for AddBooksCommand {
    fn command_type(&self) -> CommandType {
        CommandType::Add
    }

    fn execute(&self, catalog: Option<&mut Catalog>) -> Result<CommandResponse, CommandError> {
        let catalog = require_catalog(CommandType::Add, catalog)?;
        let added = catalog.load_data(self.path.as_path(), self.reader.as_ref(), &self.config)?;
        debug!("add command appended {} books", added);
        Ok(CommandResponse::empty())
    }
}
