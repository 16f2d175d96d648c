//! Environment overrides: TOGGLE_DEBUG__LOGGING__LEVEL=debug and so on.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("TOGGLE_DEBUG")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
