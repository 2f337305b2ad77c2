use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Check content integrity (duplicate ids, quiz answers, hints, backends).
    Lint(LintArgs),
    /// Print or write the aggregated configuration of one language.
    Export(ExportArgs),
    /// Browse categories, entries, or a single lesson.
    Show(ShowArgs),
    /// Find lessons by tag and/or difficulty.
    Find(FindArgs),
    /// Content counts per language.
    Stats(StatsArgs),
    /// Dump a JSON schema, or list schema names.
    Schema(SchemaArgs),
    /// Run lesson samples on the execution backend and compare outputs.
    Verify(VerifyArgs),
}

/// Arguments for `docent lint`.
#[derive(Clone, Debug, Args)]
pub struct LintArgs {
    /// Fail on warnings as well as errors.
    #[arg(long)]
    pub strict: bool,
    /// Flag every executionApiId even when no backends are configured.
    #[arg(long)]
    pub require_backends: bool,
}

/// Arguments for `docent export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Language id (e.g. `kubernetes`).
    pub language: String,
    /// Write pretty JSON to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for `docent show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub language: String,
    pub category: Option<String>,
    pub entry: Option<String>,
}

/// Arguments for `docent find`.
#[derive(Clone, Debug, Args)]
pub struct FindArgs {
    /// Restrict to one language.
    #[arg(long)]
    pub language: Option<String>,
    #[arg(long)]
    pub tag: Option<String>,
    /// beginner, intermediate, or advanced.
    #[arg(long)]
    pub difficulty: Option<String>,
}

/// Arguments for `docent stats`.
#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    pub language: Option<String>,
}

/// Arguments for `docent schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. `doc_entry`). Lists names when omitted.
    pub name: Option<String>,
}

/// Arguments for `docent verify`.
#[derive(Clone, Debug, Args)]
pub struct VerifyArgs {
    pub language: String,
}
