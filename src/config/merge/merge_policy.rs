//! Merge rules: defaults, override order, conflict handling.

use crate::namespace::DEFAULT_ORDER;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("namespace.order", DEFAULT_ORDER as u64)?
        .set_default("report.path", "fs.img")?
        .set_default("report.format", "text")?
        .set_default("report.save_on_exit", true)?
        .set_default("shell.banner", true)
}
