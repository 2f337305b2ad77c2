//! Running lesson samples and comparing them with the output lessons show.

use chrono::Utc;
use docent_core::entities::LanguageConfig;
use docent_core::responses::{SampleKind, SampleMismatch, VerifyReport};

use crate::executor::CodeExecutor;

/// One runnable piece of lesson code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample<'a> {
    pub path: String,
    pub kind: SampleKind,
    pub code: &'a str,
    pub expected: Option<&'a str>,
}

/// Every sample in `language`, in display order: sections with both code and
/// output, then each entry's challenge solution.
#[must_use]
pub fn collect_samples(language: &LanguageConfig) -> Vec<Sample<'_>> {
    let mut samples = Vec::new();

    for (category, entry) in language.entries() {
        let entry_path = format!("{}/{}/{}", language.id, category.id, entry.id);

        for (index, section) in entry.sections.iter().enumerate() {
            if let (Some(code), Some(output)) = (&section.code, &section.output) {
                samples.push(Sample {
                    path: format!("{entry_path}/sections[{index}]"),
                    kind: SampleKind::Section,
                    code: code.as_str(),
                    expected: Some(output.as_str()),
                });
            }
        }

        if let Some(challenge) = &entry.challenge {
            samples.push(Sample {
                path: format!("{entry_path}/challenge"),
                kind: SampleKind::ChallengeSolution,
                code: &challenge.solution_code,
                expected: None,
            });
        }
    }

    samples
}

/// A report with nothing checked yet, stamped now.
#[must_use]
pub fn empty_report(language: &LanguageConfig) -> VerifyReport {
    VerifyReport {
        language: language.id.clone(),
        execution_api_id: language.execution_api_id.clone(),
        checked: 0,
        passed: 0,
        mismatches: Vec::new(),
        checked_at: Utc::now(),
    }
}

/// Verify every sample of `language`.
pub async fn verify_language<E: CodeExecutor>(
    executor: &E,
    language: &LanguageConfig,
) -> VerifyReport {
    verify_language_with(executor, language, |_| {}).await
}

/// Like [`verify_language`], calling `on_sample` after each sample finishes.
///
/// Languages without an `executionApiId` have nothing to run and produce an
/// empty report. A failing sample never stops the run.
#[allow(clippy::cast_possible_truncation)]
pub async fn verify_language_with<E, F>(
    executor: &E,
    language: &LanguageConfig,
    mut on_sample: F,
) -> VerifyReport
where
    E: CodeExecutor,
    F: FnMut(&Sample<'_>),
{
    let mut report = empty_report(language);

    let Some(api) = language.execution_api_id.as_deref() else {
        tracing::info!(language = %language.id, "no executionApiId; nothing to verify");
        return report;
    };

    for sample in collect_samples(language) {
        report.checked += 1;
        match check_sample(executor, api, &sample).await {
            None => report.passed += 1,
            Some(mismatch) => {
                tracing::warn!(path = %mismatch.path, reason = %mismatch.reason, "sample mismatch");
                report.mismatches.push(mismatch);
            }
        }
        on_sample(&sample);
    }

    report.checked_at = Utc::now();
    report
}

async fn check_sample<E: CodeExecutor>(
    executor: &E,
    api: &str,
    sample: &Sample<'_>,
) -> Option<SampleMismatch> {
    let mismatch = |actual: Option<String>, reason: String| SampleMismatch {
        path: sample.path.clone(),
        kind: sample.kind,
        expected: sample.expected.map(ToString::to_string),
        actual,
        reason,
    };

    let output = match executor.execute(api, sample.code).await {
        Ok(output) => output,
        Err(error) => return Some(mismatch(None, format!("execution failed: {error}"))),
    };

    match sample.expected {
        // Lessons show what the program prints; stderr noise is not part of it.
        Some(expected) => {
            if normalize(&output.stdout) == normalize(expected) {
                None
            } else {
                Some(mismatch(Some(output.stdout), "output differs".to_string()))
            }
        }
        None if output.succeeded() => None,
        None => Some(mismatch(
            Some(output.combined()),
            format!(
                "solution exited with {}",
                output
                    .exit_code
                    .map_or_else(|| "a signal".to_string(), |code| format!("code {code}"))
            ),
        )),
    }
}

/// Compare outputs modulo line endings and trailing whitespace.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
