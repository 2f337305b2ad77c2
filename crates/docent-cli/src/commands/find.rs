use anyhow::bail;
use docent_core::entities::LanguageConfig;
use docent_core::enums::Difficulty;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FindArgs;
use crate::context::AppContext;
use crate::output::output;

/// One matching lesson, addressed the way `docent show` takes it.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FindHit {
    pub language: String,
    pub category: String,
    pub entry: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}

/// Handle `docent find`.
pub fn handle(args: &FindArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.tag.is_none() && args.difficulty.is_none() {
        bail!("docent find needs --tag, --difficulty, or both");
    }
    let difficulty = args
        .difficulty
        .as_deref()
        .map(str::parse::<Difficulty>)
        .transpose()?;

    let languages: Vec<&LanguageConfig> = match &args.language {
        Some(id) => vec![ctx.registry.require(id)?],
        None => ctx.registry.languages().iter().collect(),
    };

    let hits = find(&languages, args.tag.as_deref(), difficulty);
    output(&hits, flags.format)
}

fn find(
    languages: &[&LanguageConfig],
    tag: Option<&str>,
    difficulty: Option<Difficulty>,
) -> Vec<FindHit> {
    languages
        .iter()
        .flat_map(|&language| {
            language
                .entries()
                .filter(move |(_, entry)| tag.is_none_or(|t| entry.has_tag(t)))
                .filter(move |(_, entry)| difficulty.is_none_or(|d| entry.difficulty == d))
                .map(move |(category, entry)| FindHit {
                    language: language.id.clone(),
                    category: category.id.clone(),
                    entry: entry.id.clone(),
                    title: entry.title.clone(),
                    difficulty: entry.difficulty,
                    tags: entry.tags.clone(),
                })
        })
        .collect()
}
