use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    InvalidArgument {
        message: String,
        reason_code: Option<String>,
    },
    // A required collaborator or input was not supplied at all.
    NullInput {
        message: String,
    },
    // A data line could not be turned into a book entry. The line number is
    // 1-based and counts the header line.
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

impl LibraryError {
    pub fn invalid_argument(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidArgument { message: message.to_string(), reason_code }
    }

    pub fn null_input(message: &str) -> LibraryError {
        LibraryError::NullInput { message: message.to_string() }
    }

    pub fn malformed_record(message: &str, line: Option<usize>) -> LibraryError {
        LibraryError::MalformedRecord { message: message.to_string(), line }
    }

    pub fn io(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Io { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    // attaches the line number to a record error raised without one
    pub fn at_line(self, line_number: usize) -> LibraryError {
        match self {
            LibraryError::MalformedRecord { message, line: None } => {
                LibraryError::MalformedRecord { message, line: Some(line_number) }
            }
            other => other,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::InvalidArgument { message, .. } => message,
            LibraryError::NullInput { message } => message,
            LibraryError::MalformedRecord { message, .. } => message,
            LibraryError::Io { message, .. } => message,
            LibraryError::Serialization { message } => message,
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::io(
            format!("io error {}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidArgument { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::NullInput { message } => {
                write!(f, "{}", message)
            }
            LibraryError::MalformedRecord { message, line } => {
                match line {
                    Some(line) => write!(f, "{} (line {})", message, line),
                    None => write!(f, "{}", message),
                }
            }
            LibraryError::Io { message, reason_code } => {
                match reason_code {
                    Some(reason) => write!(f, "{} [{}]", message, reason),
                    None => write!(f, "{}", message),
                }
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CommandType {
    Add,
    List,
    Group,
    Search,
    Remove,
    Help,
    Exit,
}

impl CommandType {
    pub fn all() -> [CommandType; 7] {
        [CommandType::Add, CommandType::List, CommandType::Group, CommandType::Search,
            CommandType::Remove, CommandType::Help, CommandType::Exit]
    }

    // command tokens are matched case-sensitively, like the group and remove types
    pub fn parse(token: &str) -> Option<CommandType> {
        CommandType::all().into_iter().find(|t| t.to_string() == token)
    }
}

impl Display for CommandType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CommandType::Add => write!(f, "ADD"),
            CommandType::List => write!(f, "LIST"),
            CommandType::Group => write!(f, "GROUP"),
            CommandType::Search => write!(f, "SEARCH"),
            CommandType::Remove => write!(f, "REMOVE"),
            CommandType::Help => write!(f, "HELP"),
            CommandType::Exit => write!(f, "EXIT"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ListType {
    Short,
    Long,
}

impl ListType {
    // only the lower-case spellings are accepted
    pub fn parse(token: &str) -> Option<ListType> {
        match token {
            "short" => Some(ListType::Short),
            "long" => Some(ListType::Long),
            _ => None,
        }
    }
}

impl Display for ListType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ListType::Short => write!(f, "short"),
            ListType::Long => write!(f, "long"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GroupType {
    Author,
    Title,
}

impl GroupType {
    pub fn parse(token: &str) -> Option<GroupType> {
        match token {
            "AUTHOR" => Some(GroupType::Author),
            "TITLE" => Some(GroupType::Title),
            _ => None,
        }
    }
}

impl Display for GroupType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            GroupType::Author => write!(f, "AUTHOR"),
            GroupType::Title => write!(f, "TITLE"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RemoveType {
    Author,
    Title,
}

impl RemoveType {
    pub fn parse(token: &str) -> Option<RemoveType> {
        match token {
            "AUTHOR" => Some(RemoveType::Author),
            "TITLE" => Some(RemoveType::Title),
            _ => None,
        }
    }
}

impl Display for RemoveType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RemoveType::Author => write!(f, "AUTHOR"),
            RemoveType::Title => write!(f, "TITLE"),
        }
    }
}
