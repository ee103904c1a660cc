//! Shell route: session state and a single dispatch table mapping commands
//! to namespace operations and presentation.

use crate::config::TreefsConfig;
use crate::error::{ApiError, NamespaceError};
use crate::namespace::{
    create_directory, create_file, delete_directory, delete_file, get_root_directory,
    insert_entry, list, navigate, DirectoryCursor, Entry, EntryKind, Namespace,
};
use crate::report;
use crate::shell::history::NavigationHistory;
use crate::shell::output::map_error;
use crate::shell::parse::{parse_line, ShellCommand};
use crate::shell::presentation::{banner, format_file_content, format_listing, help_text};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading commands; print the message when non-empty
    Continue(String),
    /// Stop the loop after printing the message
    Exit(String),
}

/// Shell session: the root namespace, the cursor and its history
pub struct Session {
    root: Namespace,
    cursor: DirectoryCursor,
    history: NavigationHistory,
    config: TreefsConfig,
}

impl Session {
    /// Create a session with an empty root directory
    pub fn new(config: TreefsConfig) -> Result<Self, ApiError> {
        let root = get_root_directory(config.namespace.order)?;
        Ok(Self {
            root,
            cursor: DirectoryCursor::at_root(),
            history: NavigationHistory::new(),
            config,
        })
    }

    pub fn root(&self) -> &Namespace {
        &self.root
    }

    pub fn cursor(&self) -> &DirectoryCursor {
        &self.cursor
    }

    pub fn config(&self) -> &TreefsConfig {
        &self.config
    }

    pub fn prompt(&self) -> String {
        format!("{}$ ", self.cursor.path())
    }

    fn current(&self) -> Result<&Namespace, ApiError> {
        Ok(self.cursor.resolve(&self.root)?)
    }

    fn current_mut(&mut self) -> Result<&mut Namespace, ApiError> {
        Ok(self.cursor.resolve_mut(&mut self.root)?)
    }

    /// Parse and execute one input line
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, ApiError> {
        match parse_line(line)? {
            Some(command) => self.execute(&command),
            None => Ok(Outcome::Continue(String::new())),
        }
    }

    /// Execute a command via the single route table
    #[instrument(skip(self, command), fields(command = command.name(), cwd = %self.cursor.path()))]
    pub fn execute(&mut self, command: &ShellCommand) -> Result<Outcome, ApiError> {
        let message = match command {
            ShellCommand::Help => help_text(),
            ShellCommand::Ls => {
                let current = self.current()?;
                format_listing(self.cursor.path(), &list(current))
            }
            ShellCommand::Pwd => self.cursor.path().to_string(),
            ShellCommand::Mkdir { name } => {
                let entry = create_directory(name, self.config.namespace.order)?;
                self.insert_new(entry)?;
                format!("Directory '{}' created.", name)
            }
            ShellCommand::Rmdir { name } => {
                delete_directory(self.current_mut()?, name)?;
                format!("Directory '{}' removed.", name)
            }
            ShellCommand::Touch { name } => {
                self.insert_new(create_file(name, ""))?;
                format!("File '{}' created.", name)
            }
            ShellCommand::Echo { name, content } => {
                self.insert_new(create_file(name, content.as_bytes()))?;
                format!("File '{}' created with content.", name)
            }
            ShellCommand::Rm { name } => {
                delete_file(self.current_mut()?, name)?;
                format!("File '{}' removed.", name)
            }
            ShellCommand::Cat { name } => self.show_file(name)?,
            ShellCommand::Cd { target } => self.change_directory(target)?,
            ShellCommand::Save => self.save()?,
            ShellCommand::Exit => {
                let mut lines = Vec::new();
                if self.config.report.save_on_exit {
                    lines.push(self.save()?);
                }
                lines.push("Leaving the virtual file system. Goodbye!".to_string());
                return Ok(Outcome::Exit(lines.join("\n")));
            }
        };
        Ok(Outcome::Continue(message))
    }

    /// Insert after checking the name is free in the current directory
    fn insert_new(&mut self, entry: Entry) -> Result<(), ApiError> {
        let current = self.current_mut()?;
        insert_entry(current, entry)?;
        Ok(())
    }

    fn show_file(&self, name: &str) -> Result<String, ApiError> {
        match self.current()?.search(name) {
            Some(Entry::File(file)) => Ok(format_file_content(file)),
            Some(Entry::Directory(_)) => Err(NamespaceError::TypeMismatch {
                name: name.to_string(),
                expected: EntryKind::File,
                found: EntryKind::Directory,
            }
            .into()),
            None => Err(NamespaceError::NotFound(name.to_string()).into()),
        }
    }

    fn change_directory(&mut self, target: &str) -> Result<String, ApiError> {
        if target == ".." {
            return Ok(match self.history.pop() {
                Some(previous) => {
                    self.cursor = previous;
                    format!("Returned to {}", self.cursor.path())
                }
                None => "Already at the root directory.".to_string(),
            });
        }
        if target == "." {
            return Ok(self.cursor.path().to_string());
        }

        let before = self.cursor.clone();
        navigate(&mut self.cursor, &self.root, target)?;
        self.history.push(before);
        debug!(depth = self.history.depth(), "Navigation history grew");
        Ok(format!("Moved to {}", self.cursor.path()))
    }

    fn save(&self) -> Result<String, ApiError> {
        let path = &self.config.report.path;
        report::save_report(&self.root, path, self.config.report.format)?;
        Ok(format!("File system saved to {}", path.display()))
    }
}

/// Drive `session` with commands read from `input` until `exit` or end of input
///
/// Failed commands are reported on `output` and the loop continues.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> Result<(), ApiError> {
    if session.config.shell.banner {
        writeln!(output, "{}", banner())?;
        writeln!(output, "{}", help_text())?;
    }
    info!("Shell started");

    let mut lines = input.lines();
    loop {
        write!(output, "{}", session.prompt())?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                writeln!(output)?;
                info!("End of input");
                break;
            }
        };

        match session.execute_line(&line) {
            Ok(Outcome::Continue(message)) => {
                if !message.is_empty() {
                    writeln!(output, "{}", message)?;
                }
            }
            Ok(Outcome::Exit(message)) => {
                writeln!(output, "{}", message)?;
                info!("Shell exited");
                break;
            }
            Err(e) => {
                warn!(error = %e, "Command failed");
                writeln!(output, "{}", map_error(&e))?;
            }
        }
    }
    Ok(())
}
