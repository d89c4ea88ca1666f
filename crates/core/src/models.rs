use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Coarse topic of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Leave,
    Benefits,
    Policy,
    Other,
}

impl Intent {
    pub const ALL: [Intent; 4] = [Intent::Leave, Intent::Benefits, Intent::Policy, Intent::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Intent::Leave => "leave",
            Intent::Benefits => "benefits",
            Intent::Policy => "policy",
            Intent::Other => "other",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    /// File name the text was loaded from, e.g. `leave_policy.txt`.
    pub name: String,
    pub content: String,
}

impl PolicyDocument {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Human-readable label: extension stripped, underscores to spaces, title-cased.
    pub fn source_label(&self) -> String {
        let stem = Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name);
        title_case(&stem.replace('_', " "))
    }
}

/// Best section for a query. A zero score always pairs with empty text and source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub source: String,
    pub score: u32,
}

impl SearchResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_label_from_file_name() {
        let doc = PolicyDocument::new("leave_policy.txt", "");
        assert_eq!(doc.source_label(), "Leave Policy");

        let doc = PolicyDocument::new("WORKPLACE_policy.txt", "");
        assert_eq!(doc.source_label(), "Workplace Policy");

        let doc = PolicyDocument::new("benefits", "");
        assert_eq!(doc.source_label(), "Benefits");
    }

    #[test]
    fn title_case_restarts_after_digits() {
        assert_eq!(title_case("policy 2024edition"), "Policy 2024Edition");
    }

    #[test]
    fn intent_serializes_lowercase() {
        let json = serde_json::to_string(&Intent::Benefits).unwrap();
        assert_eq!(json, "\"benefits\"");
        assert_eq!(Intent::Other.to_string(), "other");
    }

    #[test]
    fn empty_result_is_not_a_match() {
        let result = SearchResult::empty();
        assert!(!result.is_match());
        assert!(result.text.is_empty() && result.source.is_empty());
    }
}
