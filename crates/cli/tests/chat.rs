use chrono::TimeZone;
use hr_assistant::chat;
use hr_assistant::session::{export_file_name, Role, Session};
use hr_assistant_core::{Assistant, Intent, PolicyDocument, SearchIndex};
use std::io::Cursor;

fn session() -> Session {
    let docs = vec![PolicyDocument::new(
        "leave_policy.txt",
        "=== Annual Leave ===\nEmployees get 24 days of annual leave.",
    )];
    Session::new(Assistant::new(SearchIndex::new(docs)))
}

#[test]
fn ask_records_exchange_and_appends_suggestions() {
    let mut s = session();
    let response = s.ask("How many annual leaves do I get?").unwrap();

    assert!(response.contains("24 days"));
    assert!(response.ends_with(
        "**💡 Related Questions:**\n\n1. How do I apply for annual leave?\n2. Can I carry forward annual leave?\n3. What if I need emergency leave?"
    ));
    assert_eq!(s.messages().len(), 2);
    assert_eq!(s.messages()[0].role, Role::User);
    assert_eq!(s.messages()[1].role, Role::Assistant);
}

#[test]
fn blank_input_is_ignored() {
    let mut s = session();
    assert!(s.ask("   ").is_none());
    assert!(s.messages().is_empty());
    assert_eq!(s.stats().total_queries, 0);
}

#[test]
fn stats_count_queries_per_intent() {
    let mut s = session();
    s.ask("How many sick leaves?");
    s.ask("What is the dress code?");
    s.ask("Tell me about the bonus");
    s.ask("sick again");
    s.ask("xyzzy");

    let stats = s.stats();
    assert_eq!(stats.total_queries, 5);
    assert_eq!(stats.by_intent[&Intent::Leave], 2);
    assert_eq!(stats.by_intent[&Intent::Policy], 1);
    assert_eq!(stats.by_intent[&Intent::Benefits], 1);
    assert_eq!(stats.by_intent[&Intent::Other], 1);
    assert_eq!(stats.topics.len(), 4);
    assert_eq!(stats.engagement, 50.0);
    assert_eq!(stats.engagement_label, "Good!");
}

#[test]
fn engagement_caps_at_one_hundred() {
    let mut s = session();
    for _ in 0..12 {
        s.ask("leave");
    }
    let stats = s.stats();
    assert_eq!(stats.engagement, 100.0);
    assert_eq!(stats.engagement_label, "Excellent!");
}

#[test]
fn clear_keeps_analytics() {
    let mut s = session();
    s.ask("leave");
    s.clear();
    assert!(s.messages().is_empty());
    assert_eq!(s.stats().total_queries, 1);
}

#[test]
fn transcript_layout() {
    let mut s = session();
    s.ask("xyzzy");
    let transcript = s.transcript();
    let header = format!(
        "ROOMAN HR ASSISTANT - CONVERSATION HISTORY\n{}\n\nUSER:\nxyzzy\n\nASSISTANT:\n",
        "=".repeat(50)
    );
    assert!(transcript.starts_with(&header));
    assert!(transcript.ends_with("3. Can I work from home?\n\n"));
}

#[test]
fn export_file_name_uses_timestamp() {
    let at = chrono::Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
    assert_eq!(export_file_name(&at), "hr_conversation_20240309_140507.txt");
}

#[test]
fn repl_answers_and_exports() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = session();
    let input = Cursor::new("Can I work from home?\n\n/stats\n/export\n/quit\nnever read\n");
    let mut output = Vec::new();

    chat::run(&mut s, input, &mut output, dir.path()).unwrap();

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.contains("2 days WFH"));
    assert!(printed.contains("Total queries: 1"));
    assert!(printed.contains("Saved conversation to"));
    assert!(!printed.contains("never read"));
    assert_eq!(s.messages().len(), 2);

    let exported: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(exported.len(), 1);
    let path = exported[0].as_ref().unwrap().path();
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("USER:\nCan I work from home?"));
}

#[test]
fn repl_export_with_no_messages() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = session();
    let mut output = Vec::new();
    chat::run(&mut s, Cursor::new("/export\n/quick\n"), &mut output, dir.path()).unwrap();

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.contains("Nothing to export yet."));
    assert!(printed.contains("4. What's the notice period?"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn repl_quick_number_submits_query() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = session();
    let input = Cursor::new("/quick 3\n/quick 0\n/quick 9\n/quick two\n");
    let mut output = Vec::new();
    chat::run(&mut s, input, &mut output, dir.path()).unwrap();

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.contains("> Can I work from home?"));
    assert!(printed.contains("2 days WFH"));
    assert_eq!(printed.matches("Pick a quick query between 1 and 4.").count(), 3);
    assert_eq!(s.messages().len(), 2);
    assert_eq!(s.messages()[0].content, "Can I work from home?");
    assert_eq!(s.stats().total_queries, 1);
}
