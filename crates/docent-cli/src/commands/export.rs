use std::path::Path;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `docent export`: the aggregated config of one language, as the
/// renderer consumes it.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let language = ctx.registry.require(&args.language)?;

    let Some(out) = &args.out else {
        return output(language, flags.format);
    };

    let path = Path::new(out);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(language)?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("failed to write '{}'", path.display()))?;

    tracing::info!(language = %language.id, path = %path.display(), "exported language");
    Ok(())
}
