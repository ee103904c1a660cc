//! Report writer for the `save` command
//!
//! Produces a human-readable dump of the whole hierarchy, or a JSON snapshot,
//! by walking namespace traversals. Nothing here is read back; it is a report,
//! not a persisted format.

use crate::config::ReportFormat;
use crate::error::ApiError;
use crate::namespace::{Entry, EntryKind, Namespace};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

const INDENT: &str = "    ";

/// Write the text report for `root`
///
/// Each entry is indented by its B-tree node depth plus its directory nesting.
pub fn write_text_report<W: Write>(
    root: &Namespace,
    generated_at: DateTime<Utc>,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "=== VIRTUAL FILE SYSTEM ===")?;
    writeln!(
        out,
        "Saved at: {}",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(out, "Structure:")?;
    writeln!(out)?;
    writeln!(out, "ROOT/")?;
    write_namespace(root, 1, out)
}

fn write_namespace<W: Write>(namespace: &Namespace, base: usize, out: &mut W) -> std::io::Result<()> {
    for item in namespace.traverse() {
        let depth = base + item.depth;
        let indent = INDENT.repeat(depth);
        match item.entry {
            Entry::Directory(dir) => {
                writeln!(out, "{}├── {}/", indent, dir.name())?;
                write_namespace(dir.namespace(), depth + 1, out)?;
            }
            Entry::File(file) => {
                writeln!(out, "{}├── {} ({} bytes)", indent, file.name(), file.size())?;
                if !file.content().is_empty() {
                    writeln!(
                        out,
                        "{}{}│   Content: {}",
                        indent,
                        INDENT,
                        String::from_utf8_lossy(file.content())
                    )?;
                }
            }
        }
    }
    Ok(())
}

/// Serializable view of one entry and, for directories, its contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotEntry {
    pub name: String,
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SnapshotEntry>>,
}

/// Serializable view of the whole hierarchy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub generated_at: DateTime<Utc>,
    pub root: Vec<SnapshotEntry>,
}

/// Build a snapshot of `namespace` with entries in name order
pub fn snapshot_entries(namespace: &Namespace) -> Vec<SnapshotEntry> {
    namespace
        .entries()
        .map(|entry| match entry {
            Entry::File(file) => SnapshotEntry {
                name: file.name().to_string(),
                kind: EntryKind::File,
                size: Some(file.size()),
                content: Some(String::from_utf8_lossy(file.content()).into_owned()),
                children: None,
            },
            Entry::Directory(dir) => SnapshotEntry {
                name: dir.name().to_string(),
                kind: EntryKind::Directory,
                size: None,
                content: None,
                children: Some(snapshot_entries(dir.namespace())),
            },
        })
        .collect()
}

pub fn snapshot(root: &Namespace, generated_at: DateTime<Utc>) -> Snapshot {
    Snapshot {
        generated_at,
        root: snapshot_entries(root),
    }
}

/// Render the report for `root` in the requested format
pub fn render(
    root: &Namespace,
    format: ReportFormat,
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>, ApiError> {
    let mut buffer = Vec::new();
    match format {
        ReportFormat::Text => write_text_report(root, generated_at, &mut buffer)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut buffer, &snapshot(root, generated_at))?;
            buffer.push(b'\n');
        }
    }
    Ok(buffer)
}

/// Write the report for `root` to `path`, replacing any previous report
pub fn save_report(root: &Namespace, path: &Path, format: ReportFormat) -> Result<(), ApiError> {
    let rendered = render(root, format, Utc::now())?;
    std::fs::write(path, rendered)?;
    info!(path = %path.display(), ?format, "Report saved");
    Ok(())
}
