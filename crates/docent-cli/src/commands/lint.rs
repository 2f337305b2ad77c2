use anyhow::bail;
use docent_lint::{LintOptions, lint_registry};

use crate::cli::root_commands::LintArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `docent lint`.
pub fn handle(args: &LintArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = LintOptions {
        registered_backends: ctx.config.executor.backends.clone(),
        require_registered_backends: args.require_backends,
    };
    let report = lint_registry(ctx.registry.languages(), &options);

    if flags.format == OutputFormat::Table {
        output(&report.issues, flags.format)?;
    } else {
        output(&report, flags.format)?;
    }

    let strict = args.strict || ctx.config.content.strict;
    let errors = report.error_count();
    let warnings = report.warning_count();
    if errors > 0 || (strict && warnings > 0) {
        bail!("lint failed: {errors} error(s), {warnings} warning(s)");
    }
    if !flags.quiet && warnings > 0 {
        tracing::warn!(warnings, "lint passed with warnings");
    }
    Ok(())
}
