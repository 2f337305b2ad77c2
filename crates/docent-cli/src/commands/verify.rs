use std::time::Duration;

use anyhow::{Context, bail};
use docent_exec::{PistonExecutor, collect_samples, empty_report, verify_language_with};

use crate::cli::root_commands::VerifyArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `docent verify`.
pub async fn handle(
    args: &VerifyArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let language = ctx.registry.require(&args.language)?;

    let Some(api) = &language.execution_api_id else {
        tracing::warn!(language = %language.id, "language has no executionApiId; nothing to run");
        return output(&empty_report(language), flags.format);
    };
    if !ctx.config.executor.backends.is_empty() && !ctx.config.executor.is_registered(api) {
        bail!(
            "language '{}' uses executionApiId '{api}', which is not in executor.backends",
            language.id
        );
    }

    let executor_config = &ctx.config.executor;
    executor_config.validate()?;
    let executor = PistonExecutor::new(
        executor_config.endpoint.as_str(),
        Duration::from_secs(executor_config.timeout_secs),
    )
    .context("failed to build execution client")?;

    let total = collect_samples(language).len() as u64;
    let progress = Progress::bar(total, "verifying samples");
    let report = verify_language_with(&executor, language, |sample| {
        progress.advance(&sample.path);
    })
    .await;
    progress.finish_clear();

    if flags.format == OutputFormat::Table {
        output(&report.mismatches, flags.format)?;
    } else {
        output(&report, flags.format)?;
    }

    if !report.is_clean() {
        bail!(
            "verify failed: {} of {} sample(s) did not match",
            report.mismatches.len(),
            report.checked
        );
    }
    Ok(())
}
