use hr_assistant_core::config;
use hr_assistant_core::{Assistant, Intent};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn shipped_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn shipped_assistant() -> Assistant {
    let mut cfg = config::AppConfig::default();
    cfg.documents.dir = shipped_data_dir().to_string_lossy().into_owned();
    Assistant::from_config(&cfg).unwrap()
}

#[test]
fn loads_documents_through_config_file() {
    let temp = tempdir().unwrap();
    let data_dir = temp.path().join("policies");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("wellness_policy.txt"),
        "=== Wellness ===\r\nGym reimbursement is paid yearly.\r\nGym reimbursement covers gym fees.\r\n\r\nshort",
    )
    .unwrap();

    let config_path = temp.path().join("assistant.toml");
    let config_content = r#"
        [documents]
        dir = "{data_dir}"
        files = ["leave_policy.txt", "wellness_policy.txt"]

        [responses]
        excerpt_threshold = 12
    "#
    .replace(
        "{data_dir}",
        &data_dir.to_string_lossy().replace('\\', "/"),
    );
    fs::write(&config_path, config_content).unwrap();

    let cfg = config::load(config_path.to_str()).unwrap();
    let assistant = Assistant::from_config(&cfg).unwrap();

    // leave_policy.txt is absent and silently skipped.
    assert_eq!(assistant.index().document_count(), 1);
    assert_eq!(assistant.index().section_count(), 1);

    let answer = assistant.answer("gym reimbursement");
    // gym x3, reimbursement x2, phrase and header bonuses.
    assert_eq!(answer.search.score, 18);
    assert_eq!(answer.search.source, "Wellness Policy");
    assert_eq!(answer.rule, "policy_excerpt");
}

#[test]
fn shipped_documents_answer_sample_questions() {
    let assistant = shipped_assistant();
    assert_eq!(assistant.index().document_count(), 3);

    let labels: Vec<&str> = assistant
        .index()
        .documents()
        .iter()
        .map(|d| d.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Leave Policy", "Benefits Policy", "Workplace Policy"]);

    let cases = [
        ("How many annual leaves do I get?", "24 days"),
        ("What's the health insurance coverage?", "₹5,00,000"),
        ("Can I work from home?", "2 days WFH"),
        ("What's the notice period?", "Confirmed Employees:** 60 days"),
        ("Tell me about maternity leave", "26 weeks (182 days)"),
        ("Can I carry forward my leave?", "Leave Carry Forward Rules"),
    ];
    for (query, expected) in cases {
        let response = assistant.generate_response(query);
        assert!(
            response.contains(expected),
            "{query:?} should mention {expected:?}"
        );
    }
}

#[test]
fn shipped_documents_back_excerpt_answers() {
    let assistant = shipped_assistant();
    let answer = assistant.answer("gym reimbursement");
    assert_eq!(answer.rule, "policy_excerpt");
    assert_eq!(answer.search.source, "Benefits Policy");
    assert!(answer
        .text
        .contains("Gym reimbursement of up to 12,000 per year is available to all employees."));
}

#[test]
fn nonsense_gets_fallback_menu() {
    let assistant = shipped_assistant();
    let answer = assistant.answer("xyzzy plugh");
    assert_eq!(answer.rule, "fallback");
    assert_eq!(answer.intent, Intent::Other);
    assert!(answer.text.contains("**Common Topics:**"));
    assert!(answer.text.contains("📧 **Need personalized help?** Contact hr@rooman.net"));
}

#[test]
fn search_results_pair_zero_score_with_empty_text() {
    let assistant = shipped_assistant();
    for query in ["", "   ", "the of and", "annual leave", "xyzzy"] {
        let result = assistant.search(query);
        assert_eq!(result.score == 0, result.text.is_empty(), "{query:?}");
        assert_eq!(result.score == 0, result.source.is_empty(), "{query:?}");
    }
}

#[test]
fn empty_data_directory_still_answers() {
    let temp = tempdir().unwrap();
    let mut cfg = config::AppConfig::default();
    cfg.documents.dir = temp.path().to_string_lossy().into_owned();
    let assistant = Assistant::from_config(&cfg).unwrap();

    assert_eq!(assistant.index().document_count(), 0);
    assert_eq!(assistant.search("annual leave").score, 0);
    assert!(assistant
        .generate_response("what is the dress code")
        .contains("1. What's the probation period?"));
}
