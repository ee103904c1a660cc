//! Configuration System
//!
//! Layered configuration for the namespace, the report writer, the shell and
//! logging. Sources are merged from built-in defaults, the global config file,
//! workspace config files and `TREEFS_*` environment variables.

use crate::logging::LoggingConfig;
use crate::namespace::{DEFAULT_ORDER, MAX_ORDER, MIN_ORDER};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreefsConfig {
    #[serde(default)]
    pub namespace: NamespaceConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub shell: ShellConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Namespace shape settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceConfig {
    /// Minimum degree of every directory's B-tree
    #[serde(default = "default_order")]
    pub order: usize,
}

fn default_order() -> usize {
    DEFAULT_ORDER
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
        }
    }
}

/// Output format of the `save` report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!(
                "Invalid report format: {} (must be 'text' or 'json')",
                other
            )),
        }
    }
}

/// Report writer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Destination of `save`
    #[serde(default = "default_report_path")]
    pub path: PathBuf,

    #[serde(default)]
    pub format: ReportFormat,

    /// Write the report when the shell exits through `exit`
    #[serde(default = "default_true")]
    pub save_on_exit: bool,
}

fn default_report_path() -> PathBuf {
    PathBuf::from("fs.img")
}

fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
            format: ReportFormat::default(),
            save_on_exit: default_true(),
        }
    }
}

/// Interactive shell settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Print the banner and command summary on startup
    #[serde(default = "default_true")]
    pub banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: default_true(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Namespace(String),
    Report(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Namespace(msg) => write!(f, "Namespace: {}", msg),
            ValidationError::Report(msg) => write!(f, "Report: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl TreefsConfig {
    /// Validate the entire configuration, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !(MIN_ORDER..=MAX_ORDER).contains(&self.namespace.order) {
            errors.push(ValidationError::Namespace(format!(
                "order must be between {} and {}, got {}",
                MIN_ORDER, MAX_ORDER, self.namespace.order
            )));
        }

        if self.report.path.as_os_str().is_empty() {
            errors.push(ValidationError::Report(
                "report path cannot be empty".to_string(),
            ));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
