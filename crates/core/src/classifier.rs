use crate::models::Intent;
use serde::Serialize;

/// Categories in priority order; the first with a keyword contained in the
/// lowercased query wins.
const CATEGORIES: &[(Intent, &[&str])] = &[
    (
        Intent::Leave,
        &["leave", "vacation", "holiday", "sick", "maternity", "paternity", "wfh"],
    ),
    (
        Intent::Benefits,
        &["benefit", "insurance", "health", "pf", "salary", "bonus", "esop"],
    ),
    (
        Intent::Policy,
        &["policy", "dress", "attendance", "notice", "probation", "code"],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationOutcome {
    pub intent: Intent,
    /// Keyword that decided the category; `None` for [`Intent::Other`].
    pub keyword: Option<&'static str>,
}

pub fn classify(query: &str) -> ClassificationOutcome {
    let query = query.to_lowercase();
    for (intent, keywords) in CATEGORIES {
        if let Some(keyword) = keywords.iter().find(|k| query.contains(*k)) {
            return ClassificationOutcome {
                intent: *intent,
                keyword: Some(*keyword),
            };
        }
    }
    ClassificationOutcome {
        intent: Intent::Other,
        keyword: None,
    }
}

pub fn classify_intent(query: &str) -> Intent {
    classify(query).intent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_outranks_benefits() {
        let outcome = classify("Does sick leave affect my bonus?");
        assert_eq!(outcome.intent, Intent::Leave);
        assert_eq!(outcome.keyword, Some("leave"));
    }

    #[test]
    fn substring_containment() {
        // "benefits" contains "benefit"; "pf" hides inside longer words too.
        assert_eq!(classify_intent("List the benefits"), Intent::Benefits);
        assert_eq!(classify_intent("PDF of handbook"), Intent::Other);
        assert_eq!(classify_intent("update my PF nominee"), Intent::Benefits);
        assert_eq!(classify_intent("What is the dress code?"), Intent::Policy);
    }

    #[test]
    fn wfh_counts_as_leave() {
        assert_eq!(classify_intent("WFH rules"), Intent::Leave);
    }

    #[test]
    fn unmatched_queries_are_other() {
        for query in ["", "   ", "xyzzy plugh", "Where is the cafeteria?"] {
            let outcome = classify(query);
            assert_eq!(outcome.intent, Intent::Other, "{query}");
            assert_eq!(outcome.keyword, None);
        }
    }
}
