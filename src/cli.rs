//! CLI: process arguments for the `treefs` binary and how they fold into
//! the loaded configuration.

use crate::config::{ConfigLoader, ReportFormat, TreefsConfig};
use crate::error::ApiError;
use clap::Parser;
use std::path::PathBuf;

/// Treefs - in-memory virtual file system shell
#[derive(Debug, Parser)]
#[command(name = "treefs")]
#[command(about = "In-memory virtual file system backed by a B-tree per directory")]
pub struct Cli {
    /// Workspace root directory (where config/ is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum degree of every directory's B-tree
    #[arg(long)]
    pub order: Option<usize>,

    /// Report file written by `save`
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Report format (text, json)
    #[arg(long)]
    pub report_format: Option<ReportFormat>,

    /// Do not write the report on `exit`
    #[arg(long)]
    pub no_save_on_exit: bool,

    /// Do not print the banner and help on startup
    #[arg(long)]
    pub no_banner: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load configuration, then let flags override it.
    /// Precedence: CLI flags override environment override config files override defaults.
    /// `TREEFS_LOG*` variables are folded in before the flags.
    pub fn resolve_config(&self) -> Result<TreefsConfig, ApiError> {
        let mut config = match self.config {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&self.workspace)?,
        };
        config.logging.apply_env();
        let config = self.apply_overrides(config);

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }

    /// Fold command-line flags into `config`
    pub fn apply_overrides(&self, mut config: TreefsConfig) -> TreefsConfig {
        if let Some(order) = self.order {
            config.namespace.order = order;
        }
        if let Some(ref report) = self.report {
            config.report.path = report.clone();
        }
        if let Some(format) = self.report_format {
            config.report.format = format;
        }
        if self.no_save_on_exit {
            config.report.save_on_exit = false;
        }
        if self.no_banner {
            config.shell.banner = false;
        }

        let logging = &mut config.logging;
        if self.quiet {
            logging.enabled = false;
        }
        if self.verbose {
            logging.level = "debug".to_string();
        }
        if let Some(ref level) = self.log_level {
            logging.level = level.clone();
        }
        if let Some(ref format) = self.log_format {
            logging.format = format.clone();
        }
        if let Some(ref output) = self.log_output {
            logging.output = output.clone();
        }
        if let Some(ref file) = self.log_file {
            logging.file = file.clone();
        }
        config
    }
}
