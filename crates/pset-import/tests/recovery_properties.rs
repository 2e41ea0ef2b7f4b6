use pretty_assertions::assert_eq;
use pset_core::enums::RecoveryMethod;
use pset_import::{ImportError, diagnose, recover, repair};
use rstest::rstest;

fn keys(raw: &str) -> Vec<String> {
    recover(raw)
        .unwrap()
        .entries
        .into_iter()
        .map(|e| e.key)
        .collect()
}

#[test]
fn valid_json_is_parsed_directly_in_order() {
    let raw = r#"{"content3": "  third  ", "content1": "first\\nline", "content2": "second"}"#;
    let recovery = recover(raw).unwrap();

    assert_eq!(recovery.method, RecoveryMethod::Direct);
    let contents: Vec<_> = recovery.entries.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["first\nline", "second", "third"]);
    let indices: Vec<_> = recovery.entries.iter().map(|e| e.index.as_str()).collect();
    assert_eq!(indices, vec!["1", "2", "3"]);
}

#[test]
fn missing_braces_are_repaired() {
    let recovery = recover(r#""content1": "a""#).unwrap();
    assert_eq!(recovery.method, RecoveryMethod::Preprocessed);
    assert_eq!(recovery.entries[0].content, "a");
}

#[test]
fn latex_brackets_survive_as_literals() {
    let raw = r#"{"content1": "Solve \[x^2 = 4\] for x"}"#;
    let recovery = recover(raw).unwrap();
    assert_eq!(recovery.method, RecoveryMethod::Preprocessed);
    assert_eq!(recovery.entries[0].content, r"Solve \[x^2 = 4\] for x");
}

#[test]
fn embedded_pair_is_extracted_from_garbage() {
    let raw = r#"garbage <<< "content3": "some text" >>> more"#;
    let recovery = recover(raw).unwrap();
    assert_eq!(recovery.method, RecoveryMethod::RegexExtraction);
    assert_eq!(recovery.entries.len(), 1);
    assert_eq!(recovery.entries[0].key, "content3");
    assert_eq!(recovery.entries[0].content, "some text");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t  \n")]
fn blank_input_has_no_recoverable_content(#[case] raw: &str) {
    assert!(matches!(recover(raw), Err(ImportError::NoRecoverableContent)));
}

#[rstest]
#[case(r#"{"content2": "b", "content1": "a"}"#, &["content1", "content2"])]
#[case(r#"{"content10": "x", "content9": "y", "content1": "z"}"#, &["content1", "content9", "content10"])]
#[case(r#""content2": "b" junk "content1": "a""#, &["content1", "content2"])]
fn output_is_sorted_by_numeric_suffix(#[case] raw: &str, #[case] expected: &[&str]) {
    assert_eq!(keys(raw), expected);
}

#[test]
fn recovery_is_idempotent() {
    let raw = r#"content1: "x \[y\]", content2: "z""#;
    assert_eq!(recover(raw).unwrap(), recover(raw).unwrap());
}

#[test]
fn repaired_payload_reparses_directly() {
    let repaired = repair(r#"content1: "a \[b\]""#);
    let recovery = recover(&repaired).unwrap();
    assert_eq!(recovery.method, RecoveryMethod::Direct);
    assert_eq!(recovery.entries[0].content, r"a \[b\]");
}

#[test]
fn diagnostics_do_not_block_recovery() {
    let raw = r#""content1": "a""#;
    assert!(!diagnose(raw).is_well_formed());
    assert!(recover(raw).is_ok());
}

#[test]
fn parsed_object_without_content_keys_falls_through_to_extraction() {
    let recovery = recover(r#"{"data": {"content1": "a"}}"#).unwrap();
    assert_eq!(recovery.method, RecoveryMethod::RegexExtraction);
    assert_eq!(recovery.entries.len(), 1);
    assert_eq!(recovery.entries[0].key, "content1");
    assert_eq!(recovery.entries[0].content, "a");
}

#[test]
fn valid_json_without_any_content_key_is_unrecoverable() {
    assert!(matches!(
        recover(r#"{"title": "x", "count": 2}"#),
        Err(ImportError::NoRecoverableContent)
    ));
}
