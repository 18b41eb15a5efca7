use std::io::{BufRead, Write};
use tracing::{debug, warn};
use crate::catalog::domain::Catalog;
use crate::catalog::factory::create_command;
use crate::core::command::{Command, CommandError, CommandResponse};
use crate::core::domain::Configuration;
use crate::core::library::{CommandType, LibraryResult};

const HELP_TEXT: &str = "Available commands:
ADD <file.csv>                 load books from a data file
LIST [short|long]              list all books
GROUP <AUTHOR|TITLE>           group books by author or title
SEARCH <word>                  find titles containing a word
REMOVE <AUTHOR|TITLE> <value>  remove books by author or by title
HELP                           show this overview
EXIT                           leave the session";

// ParsedLine is what one line of console input asks for.
pub enum ParsedLine {
    Help,
    Exit,
    Command(Box<dyn Command>),
}

// Splits off the leading command token and hands the rest of the line, as is,
// to the command for validation.
pub fn parse_command_line(config: &Configuration, line: &str) -> Result<ParsedLine, CommandError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Err(CommandError::NullInput { message: "no command given".to_string() });
    }
    let (token, argument) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let command_type = CommandType::parse(token).ok_or_else(|| CommandError::InvalidArgument {
        message: format!("unknown command {:?}, type HELP for the list of commands", token),
        reason_code: None,
    })?;
    match command_type {
        CommandType::Help => Ok(ParsedLine::Help),
        CommandType::Exit => Ok(ParsedLine::Exit),
        _ => Ok(ParsedLine::Command(create_command(config, command_type, Some(argument))?)),
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SessionControl {
    Continue,
    Exit,
}

// Session runs the read-execute-print loop over one catalog until EXIT or the
// end of input. Command errors are printed and never end the session.
pub struct Session<R: BufRead, W: Write> {
    config: Configuration,
    catalog: Catalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: Configuration, catalog: Catalog, input: R, output: W) -> Self {
        Self {
            config,
            catalog,
            input,
            output,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn run(&mut self) -> LibraryResult<()> {
        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input, closing session");
                writeln!(self.output)?;
                return Ok(());
            }
            let line = match String::from_utf8(buf) {
                Ok(line) => line,
                Err(err) => {
                    warn!("input line is not valid UTF-8: {}", err);
                    writeln!(self.output, "ERROR: input line is not valid UTF-8")?;
                    continue;
                }
            };
            if self.handle_line(line.trim_end_matches(['\n', '\r']))? == SessionControl::Exit {
                return Ok(());
            }
        }
    }

    pub fn handle_line(&mut self, line: &str) -> LibraryResult<SessionControl> {
        if line.trim().is_empty() {
            return Ok(SessionControl::Continue);
        }
        let res = parse_command_line(&self.config, line).and_then(|parsed| match parsed {
            ParsedLine::Help => Ok(Some(CommandResponse::new(HELP_TEXT.to_string()))),
            ParsedLine::Exit => Ok(None),
            ParsedLine::Command(command) => command.execute(Some(&mut self.catalog)).map(Some),
        });
        match res {
            Ok(Some(response)) => {
                if !response.is_empty() {
                    writeln!(self.output, "{}", response.output)?;
                }
                Ok(SessionControl::Continue)
            }
            Ok(None) => Ok(SessionControl::Exit),
            Err(err) => {
                warn!("command {:?} failed: {}", line, err);
                writeln!(self.output, "ERROR: {}", err)?;
                Ok(SessionControl::Continue)
            }
        }
    }
}
