//! Content-integrity rules against hand-built and shipped trees.

use std::path::Path;

use docent_content::ContentRegistry;
use docent_core::entities::*;
use docent_core::enums::{Difficulty, LintRule, Severity};
use docent_lint::{LintOptions, lint_language, lint_registry};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn section() -> Section {
    Section {
        heading: "Heading".into(),
        content: "Body".into(),
        ..Section::default()
    }
}

fn entry(id: &str) -> DocEntry {
    DocEntry {
        id: id.into(),
        title: id.into(),
        difficulty: Difficulty::Beginner,
        tags: Vec::new(),
        sections: vec![section()],
        quiz: None,
        challenge: None,
        diagram: None,
    }
}

fn category(id: &str, entries: Vec<DocEntry>) -> DocCategory {
    DocCategory {
        id: id.into(),
        label: id.into(),
        icon: "*".into(),
        entries,
    }
}

fn language(id: &str, categories: Vec<DocCategory>) -> LanguageConfig {
    LanguageConfig {
        id: id.into(),
        label: id.into(),
        icon: "*".into(),
        color: "#000000".into(),
        official_url: "https://example.com".into(),
        tagline: "tagline".into(),
        execution_api_id: None,
        categories,
    }
}

fn question(options: &[&str], correct_index: usize) -> QuizQuestion {
    QuizQuestion {
        question: "Pick".into(),
        options: options.iter().map(ToString::to_string).collect(),
        correct_index,
        explanation: "Because".into(),
    }
}

fn rules(issues: &[docent_core::responses::LintIssue]) -> Vec<LintRule> {
    issues.iter().map(|i| i.rule).collect()
}

#[test]
fn clean_tree_has_no_issues() {
    let lang = language("k8s", vec![category("pods", vec![entry("a"), entry("b")])]);
    let report = lint_registry(&[lang], &LintOptions::default());

    assert!(report.is_clean());
    assert_eq!(report.languages_checked, 1);
    assert_eq!(report.categories_checked, 1);
    assert_eq!(report.entries_checked, 2);
}

#[test]
fn duplicate_language_ids_are_flagged() {
    let report = lint_registry(
        &[language("k8s", Vec::new()), language("k8s", Vec::new())],
        &LintOptions::default(),
    );
    assert_eq!(rules(&report.issues), vec![LintRule::DuplicateLanguageId]);
}

#[test]
fn colliding_categories_across_partitions_are_flagged() {
    let merged = docent_core::aggregate_partitions([
        vec![category("pods", vec![entry("a")])],
        vec![category("pods", vec![entry("b")])],
    ]);
    let issues = lint_language(&language("k8s", merged), &LintOptions::default());

    assert_eq!(rules(&issues), vec![LintRule::DuplicateCategoryId]);
    assert_eq!(issues[0].path, "k8s/pods");
    assert_eq!(issues[0].severity, Severity::Error);
}

#[test]
fn duplicate_entries_within_a_category_are_flagged() {
    let lang = language("k8s", vec![category("pods", vec![entry("a"), entry("a")])]);
    let issues = lint_language(&lang, &LintOptions::default());
    assert_eq!(rules(&issues), vec![LintRule::DuplicateEntryId]);
}

#[test]
fn same_entry_id_in_different_categories_is_fine() {
    let lang = language(
        "k8s",
        vec![
            category("pods", vec![entry("intro")]),
            category("services", vec![entry("intro")]),
        ],
    );
    assert!(lint_language(&lang, &LintOptions::default()).is_empty());
}

#[test]
fn entry_without_sections_is_flagged() {
    let mut bare = entry("bare");
    bare.sections.clear();
    let issues = lint_language(
        &language("k8s", vec![category("pods", vec![bare])]),
        &LintOptions::default(),
    );
    assert_eq!(rules(&issues), vec![LintRule::EmptySections]);
}

#[rstest]
#[case(&["a", "b", "c"], 0, None)]
#[case(&["a", "b", "c"], 2, None)]
#[case(&["a", "b", "c"], 3, Some(LintRule::CorrectIndexOutOfRange))]
#[case(&["a"], 7, Some(LintRule::CorrectIndexOutOfRange))]
#[case(&[], 0, Some(LintRule::EmptyQuizOptions))]
fn quiz_answer_bounds(
    #[case] options: &[&str],
    #[case] correct_index: usize,
    #[case] expected: Option<LintRule>,
) {
    let mut with_quiz = entry("quiz");
    with_quiz.quiz = Some(vec![question(options, correct_index)]);
    let issues = lint_language(
        &language("k8s", vec![category("pods", vec![with_quiz])]),
        &LintOptions::default(),
    );

    assert_eq!(rules(&issues), expected.into_iter().collect::<Vec<_>>());
    if expected.is_some() {
        assert_eq!(issues[0].path, "k8s/pods/quiz/quiz[0]");
    }
}

#[test]
fn empty_quiz_is_a_warning() {
    let mut with_quiz = entry("quiz");
    with_quiz.quiz = Some(Vec::new());
    let report = lint_registry(
        &[language("k8s", vec![category("pods", vec![with_quiz])])],
        &LintOptions::default(),
    );

    assert_eq!(rules(&report.issues), vec![LintRule::EmptyQuiz]);
    assert_eq!(report.error_count(), 0);
    assert_eq!(report.warning_count(), 1);
    assert_eq!(
        report
            .issues_for(LintRule::EmptyQuiz)
            .map(|i| i.path.as_str())
            .collect::<Vec<_>>(),
        vec!["k8s/pods/quiz"]
    );
}

#[test]
fn challenge_without_hints_is_flagged() {
    let mut with_challenge = entry("challenge");
    with_challenge.challenge = Some(Challenge {
        prompt: "Do it".into(),
        starter_code: "start".into(),
        solution_code: "done".into(),
        hints: Vec::new(),
    });
    let issues = lint_language(
        &language("k8s", vec![category("pods", vec![with_challenge])]),
        &LintOptions::default(),
    );

    assert_eq!(rules(&issues), vec![LintRule::EmptyHints]);
    assert_eq!(issues[0].path, "k8s/pods/challenge/challenge");
}

#[test]
fn blank_ids_are_flagged() {
    let lang = language(" ", vec![category("", vec![entry("\t")])]);
    let issues = lint_language(&lang, &LintOptions::default());
    assert_eq!(
        rules(&issues),
        vec![
            LintRule::BlankIdentifier,
            LintRule::BlankIdentifier,
            LintRule::BlankIdentifier
        ]
    );
}

#[rstest]
#[case(Some("python"), &["python", "bash"], false, false)]
#[case(Some("ruby"), &["python"], false, true)]
#[case(Some("ruby"), &[], false, false)]
#[case(Some("ruby"), &[], true, true)]
#[case(None, &["python"], true, false)]
fn execution_api_must_be_registered(
    #[case] api: Option<&str>,
    #[case] backends: &[&str],
    #[case] require: bool,
    #[case] dangling: bool,
) {
    let mut lang = language("python", vec![category("basics", vec![entry("print")])]);
    lang.execution_api_id = api.map(ToString::to_string);
    let options = LintOptions {
        registered_backends: backends.iter().map(ToString::to_string).collect(),
        require_registered_backends: require,
    };

    let issues = lint_language(&lang, &options);

    assert_eq!(
        issues.iter().any(|i| i.rule == LintRule::DanglingExecutionApi),
        dangling
    );
}

#[test]
fn shipped_content_is_clean() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../content");
    let registry = ContentRegistry::load(&root).expect("shipped content loads");

    let report = lint_registry(registry.languages(), &LintOptions::default());

    assert!(report.is_clean(), "unexpected issues: {:#?}", report.issues);
    assert_eq!(report.languages_checked, 2);
}
