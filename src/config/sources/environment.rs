//! Environment source: TREEFS_<SECTION>__<KEY>, e.g. TREEFS_NAMESPACE__ORDER=4

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("TREEFS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
