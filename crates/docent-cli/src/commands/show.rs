use docent_core::entities::{DocCategory, DocEntry};
use docent_core::enums::Difficulty;
use docent_core::errors::CoreError;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output;

/// A category row in `docent show <language>`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub entries: usize,
}

impl From<&DocCategory> for CategorySummary {
    fn from(category: &DocCategory) -> Self {
        Self {
            id: category.id.clone(),
            label: category.label.clone(),
            icon: category.icon.clone(),
            entries: category.entries.len(),
        }
    }
}

/// An entry row in `docent show <language> <category>`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EntrySummary {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub sections: usize,
    pub quiz_questions: usize,
    pub has_challenge: bool,
    pub has_diagram: bool,
}

impl From<&DocEntry> for EntrySummary {
    fn from(entry: &DocEntry) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            difficulty: entry.difficulty,
            tags: entry.tags.clone(),
            sections: entry.sections.len(),
            quiz_questions: entry.quiz_len(),
            has_challenge: entry.challenge.is_some(),
            has_diagram: entry.diagram.is_some(),
        }
    }
}

/// Handle `docent show`.
pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let language = ctx.registry.require(&args.language)?;

    let Some(category_id) = &args.category else {
        let rows: Vec<CategorySummary> = language.categories.iter().map(Into::into).collect();
        return output(&rows, flags.format);
    };

    // First match wins when partitions collide; `docent lint` reports the rest.
    let category = language.find_category(category_id).ok_or_else(|| {
        CoreError::not_found("category", &format!("{}/{category_id}", language.id))
    })?;

    let Some(entry_id) = &args.entry else {
        let rows: Vec<EntrySummary> = category.entries.iter().map(Into::into).collect();
        return output(&rows, flags.format);
    };

    let entry = category.find_entry(entry_id).ok_or_else(|| {
        CoreError::not_found(
            "entry",
            &format!("{}/{}/{entry_id}", language.id, category.id),
        )
    })?;
    output(entry, flags.format)
}
