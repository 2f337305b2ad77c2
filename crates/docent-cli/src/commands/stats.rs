use docent_core::responses::ContentStats;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `docent stats`.
pub fn handle(args: &StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(id) = &args.language {
        let language = ctx.registry.require(id)?;
        return output(&ContentStats::for_language(language), flags.format);
    }

    let stats: Vec<ContentStats> = ctx
        .registry
        .languages()
        .iter()
        .map(ContentStats::for_language)
        .collect();
    output(&stats, flags.format)
}
