use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Lint(args) => commands::lint::handle(&args, ctx, flags),
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Show(args) => commands::show::handle(&args, ctx, flags),
        Commands::Find(args) => commands::find::handle(&args, ctx, flags),
        Commands::Stats(args) => commands::stats::handle(&args, ctx, flags),
        Commands::Verify(args) => commands::verify::handle(&args, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}

#[cfg(test)]
mod tests {
    use docent_config::DocentConfig;
    use docent_content::ContentRegistry;

    use super::dispatch;
    use crate::cli::root_commands::{Commands, SchemaArgs};
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            color: ColorMode::Never,
            quiet: true,
            verbose: false,
            content: None,
        }
    }

    fn empty_context() -> AppContext {
        AppContext {
            config: DocentConfig::default(),
            registry: ContentRegistry::default(),
        }
    }

    #[tokio::test]
    async fn schema_is_handled_through_dispatch() {
        let known = Commands::Schema(SchemaArgs {
            name: Some("doc_entry".into()),
        });
        assert!(dispatch(known, &empty_context(), &flags()).await.is_ok());

        let unknown = Commands::Schema(SchemaArgs {
            name: Some("nope".into()),
        });
        assert!(dispatch(unknown, &empty_context(), &flags()).await.is_err());
    }
}
