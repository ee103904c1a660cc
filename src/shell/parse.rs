//! Shell parse: splits one input line into a command word and its arguments.

use crate::error::ApiError;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Ls,
    Pwd,
    Mkdir { name: String },
    Rmdir { name: String },
    Touch { name: String },
    Echo { name: String, content: String },
    Rm { name: String },
    Cat { name: String },
    Cd { target: String },
    Save,
    Exit,
}

impl ShellCommand {
    /// Command word, used for logging
    pub fn name(&self) -> &'static str {
        match self {
            ShellCommand::Help => "help",
            ShellCommand::Ls => "ls",
            ShellCommand::Pwd => "pwd",
            ShellCommand::Mkdir { .. } => "mkdir",
            ShellCommand::Rmdir { .. } => "rmdir",
            ShellCommand::Touch { .. } => "touch",
            ShellCommand::Echo { .. } => "echo",
            ShellCommand::Rm { .. } => "rm",
            ShellCommand::Cat { .. } => "cat",
            ShellCommand::Cd { .. } => "cd",
            ShellCommand::Save => "save",
            ShellCommand::Exit => "exit",
        }
    }
}

/// Split off the first whitespace-delimited word
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], input[end..].trim_start()),
        None => (input, ""),
    }
}

fn required(word: &str, usage: &str) -> Result<String, ApiError> {
    if word.is_empty() {
        Err(ApiError::Usage(usage.to_string()))
    } else {
        Ok(word.to_string())
    }
}

/// Parse one input line; blank lines yield `None`
///
/// The first word is the command and the second its name argument. For
/// `echo` the remainder of the line, inner spacing included, is the content.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ApiError> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let (command, rest) = split_word(line);
    if command.is_empty() {
        return Ok(None);
    }
    let (arg, remainder) = split_word(rest);

    let parsed = match command {
        "help" => ShellCommand::Help,
        "ls" => ShellCommand::Ls,
        "pwd" => ShellCommand::Pwd,
        "mkdir" => ShellCommand::Mkdir {
            name: required(arg, "mkdir <directory>")?,
        },
        "rmdir" => ShellCommand::Rmdir {
            name: required(arg, "rmdir <directory>")?,
        },
        "touch" => ShellCommand::Touch {
            name: required(arg, "touch <file>")?,
        },
        "echo" => {
            let usage = "echo <file> <content>";
            let name = required(arg, usage)?;
            let content = required(remainder.trim_end(), usage)?;
            ShellCommand::Echo { name, content }
        }
        "rm" => ShellCommand::Rm {
            name: required(arg, "rm <file>")?,
        },
        "cat" => ShellCommand::Cat {
            name: required(arg, "cat <file>")?,
        },
        "cd" => ShellCommand::Cd {
            target: required(arg, "cd <directory> | cd ..")?,
        },
        "save" => ShellCommand::Save,
        "exit" | "quit" => ShellCommand::Exit,
        other => return Err(ApiError::UnknownCommand(other.to_string())),
    };
    Ok(Some(parsed))
}
