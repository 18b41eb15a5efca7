use std::fmt;
use std::fmt::{Display, Formatter};
use crate::catalog::domain::Catalog;
use crate::core::library::{CommandType, LibraryError};

#[derive(Debug)]
pub enum CommandError {
    InvalidArgument {
        message: String,
        reason_code: Option<String>,
    },
    NullInput {
        message: String,
    },
    MalformedRecord {
        message: String,
        line: Option<usize>,
    },
    Io {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl CommandError {
    pub fn invalid_argument(command_type: CommandType, argument: &str) -> CommandError {
        CommandError::InvalidArgument {
            message: format!("invalid argument for {} command: {:?}", command_type, argument),
            reason_code: Some(command_type.to_string()),
        }
    }
}

// Command is one user operation. Its argument is validated when the command
// is constructed, so execute only fails on collaborator errors.
pub trait Command {
    fn command_type(&self) -> CommandType;
    fn execute(&self, catalog: Option<&mut Catalog>) -> Result<CommandResponse, CommandError>;
}

// CommandResponse carries the text to show on the console, possibly empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandResponse {
    pub output: String,
}

impl CommandResponse {
    pub fn new(output: String) -> Self {
        Self {
            output,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }
}

pub(crate) fn require_argument(command_type: CommandType, argument: Option<&str>) -> Result<&str, CommandError> {
    argument.ok_or_else(|| CommandError::InvalidArgument {
        message: format!("the argument of the {} command must not be absent", command_type),
        reason_code: Some(command_type.to_string()),
    })
}

pub(crate) fn require_catalog(command_type: CommandType, catalog: Option<&mut Catalog>) -> Result<&mut Catalog, CommandError> {
    catalog.ok_or_else(|| CommandError::InvalidArgument {
        message: format!("the {} command needs a catalog to run against", command_type),
        reason_code: Some(command_type.to_string()),
    })
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::InvalidArgument { message, reason_code } => {
                CommandError::InvalidArgument { message, reason_code }
            }
            LibraryError::NullInput { message } => {
                CommandError::NullInput { message }
            }
            LibraryError::MalformedRecord { message, line } => {
                CommandError::MalformedRecord { message, line }
            }
            LibraryError::Io { message, reason_code } => {
                CommandError::Io { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidArgument { message, .. } => {
                write!(f, "{}", message)
            }
            CommandError::NullInput { message } => {
                write!(f, "{}", message)
            }
            CommandError::MalformedRecord { message, line } => {
                match line {
                    Some(line) => write!(f, "malformed record on line {}: {}", line, message),
                    None => write!(f, "malformed record: {}", message),
                }
            }
            CommandError::Io { message, .. } => {
                write!(f, "{}", message)
            }
            CommandError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CommandError {}
