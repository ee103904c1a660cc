//! Interactive shell: parse, route, history and presentation.
//! The namespace core never calls back into this layer.

mod history;
mod output;
mod parse;
mod presentation;
mod route;

pub use history::NavigationHistory;
pub use output::map_error;
pub use parse::{parse_line, ShellCommand};
pub use presentation::{banner, format_file_content, format_listing, help_text};
pub use route::{run, Outcome, Session};
