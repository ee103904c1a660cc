//! Shell presentation: help text, listings and file display.

use crate::namespace::{Entry, File, TraversalItem};

const RULE: &str = "─────────────────────";

pub fn banner() -> &'static str {
    "Virtual file system started."
}

pub fn help_text() -> String {
    [
        "=== VIRTUAL FILE SYSTEM ===",
        "Available commands:",
        "  help                    - Show this help",
        "  ls                      - List the current directory",
        "  mkdir <name>            - Create a directory",
        "  rmdir <name>            - Remove an empty directory",
        "  touch <name>            - Create an empty file",
        "  echo <name> <content>   - Create a file with content",
        "  rm <name>               - Remove a file",
        "  cd <name>               - Enter a directory",
        "  cd ..                   - Return to the previous directory",
        "  pwd                     - Show the current directory",
        "  cat <name>              - Show a file's content",
        "  save                    - Write the report file",
        "  exit                    - Save and quit",
        "===========================",
    ]
    .join("\n")
}

/// `ls` output: header, then one line per entry indented by node depth
pub fn format_listing(path: &str, items: &[TraversalItem<'_>]) -> String {
    let mut lines = vec![format!("Contents of {}:", path)];
    if items.is_empty() {
        lines.push("  (empty directory)".to_string());
    }
    for item in items {
        let suffix = match item.entry {
            Entry::Directory(_) => "/",
            Entry::File(_) => "",
        };
        lines.push(format!(
            "{}{}{}",
            "    ".repeat(item.depth),
            item.entry.name(),
            suffix
        ));
    }
    lines.join("\n")
}

/// `cat` output: content between rules, then the size
pub fn format_file_content(file: &File) -> String {
    format!(
        "Contents of {}:\n{}\n{}\n{}\nSize: {} bytes",
        file.name(),
        RULE,
        String::from_utf8_lossy(file.content()),
        RULE,
        file.size()
    )
}
