//! Scripted replay tests

use highlighter::config::HighlighterConfig;
use highlighter::model::Span;
use highlighter::palette::ColorTag;
use highlighter::replay::{replay, Script};

const SAMPLE: &str = include_str!("../samples/session.yaml");

#[test]
fn test_sample_session() {
    let script = Script::from_yaml(SAMPLE).unwrap();
    let report = replay(&script, HighlighterConfig::default()).unwrap();

    assert!(report.active);
    assert_eq!(report.color, ColorTag::Blue);

    let code = &report.documents[0];
    assert_eq!(code.id, 1);
    assert_eq!(
        code.spans,
        vec![Span::new((0, 3).into(), (0, 7).into(), ColorTag::Red)]
    );

    let notes = &report.documents[1];
    assert_eq!(notes.text, "notes\n");
    assert_eq!(
        notes.spans,
        vec![Span::new((0, 0).into(), (0, 5).into(), ColorTag::Blue)]
    );

    assert_eq!(
        report.messages,
        vec![
            "Highlighting mode started. Select text to toggle highlights.".to_string(),
            "Highlight color set to Blue".to_string(),
        ]
    );
}

#[test]
fn test_pending_selection_commits_at_end() {
    let script = Script::from_yaml(
        r#"
documents:
  - id: 3
    text: "abcdef"
steps:
  - start
  - select: [[0, 1, 0, 3]]
"#,
    )
    .unwrap();
    let report = replay(&script, HighlighterConfig::default()).unwrap();
    assert_eq!(report.documents[0].spans.len(), 1);
}

#[test]
fn test_stop_reverts_document_text() {
    let script = Script::from_yaml(
        r#"
documents:
  - id: 1
    text: "last line"
steps:
  - start
  - select: [[0, 0, 0, 9]]
  - wait: 300
  - stop
"#,
    )
    .unwrap();
    let report = replay(&script, HighlighterConfig::default()).unwrap();
    assert!(!report.active);
    assert_eq!(report.documents[0].text, "last line");
    assert!(report.documents[0].spans.is_empty());
}

#[test]
fn test_focus_on_unknown_document_fails() {
    let script = Script::from_yaml(
        "documents:\n  - id: 1\n    text: x\nsteps:\n  - focus: 9\n",
    )
    .unwrap();
    let err = replay(&script, HighlighterConfig::default()).unwrap_err();
    assert!(err.contains("document 9"), "{}", err);
}

#[test]
fn test_report_serializes_as_yaml() {
    let script = Script::from_yaml(SAMPLE).unwrap();
    let report = replay(&script, HighlighterConfig::default()).unwrap();
    let yaml = serde_yaml::to_string(&report).unwrap();
    assert!(yaml.contains("color: blue"), "{}", yaml);
}
