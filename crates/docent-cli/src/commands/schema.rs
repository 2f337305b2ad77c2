use anyhow::anyhow;
use docent_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `docent schema`. Needs neither config nor content.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let Some(name) = &args.name else {
        return output(&registry.list(), flags.format);
    };

    let schema = registry.get(name).ok_or_else(|| {
        anyhow!(
            "unknown schema '{name}'. Available: {}",
            registry.list().join(", ")
        )
    })?;
    output(schema, flags.format)
}
