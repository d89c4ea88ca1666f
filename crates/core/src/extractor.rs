//! Query concept extraction: tokenize, drop stop-words, expand through a fixed
//! synonym table.

use std::collections::HashSet;

const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "we", "our", "you", "the", "a", "an", "is", "are", "was", "were", "can",
    "could", "would", "should", "what", "when", "where", "how", "why", "do", "does", "get",
    "take", "have", "has", "of", "to", "for", "in", "on", "at", "about", "tell", "explain",
];

/// Tokens shorter than this are never keywords.
const MIN_KEYWORD_CHARS: usize = 3;

/// Concept name and the terms it expands to. A query token found in any term
/// list pulls in the whole list.
pub const CONCEPT_MAP: &[(&str, &[&str])] = &[
    ("leaves", &["leave", "vacation", "time off", "holiday", "absence"]),
    ("health", &["health", "medical", "insurance", "hospital", "coverage"]),
    ("salary", &["salary", "pay", "compensation", "wage", "income"]),
    ("work from home", &["wfh", "remote", "home", "hybrid", "flexible"]),
    ("notice", &["notice", "resignation", "quit", "leaving", "resign"]),
    ("probation", &["probation", "trial", "new", "joining"]),
    ("sick", &["sick", "illness", "medical", "unwell"]),
    ("annual", &["annual", "yearly", "vacation", "planned"]),
    ("maternity", &["maternity", "pregnancy", "maternal", "baby"]),
    ("paternity", &["paternity", "father", "dad"]),
    ("benefits", &["benefits", "perks", "advantages", "insurance", "pf"]),
];

/// Lowercased word tokens (runs of alphanumerics and `_`).
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Query tokens that survive stop-word and length filtering, in query order.
pub fn keywords(query: &str) -> Vec<String> {
    tokenize(query)
        .into_iter()
        .filter(|w| w.chars().count() >= MIN_KEYWORD_CHARS && !is_stop_word(w))
        .collect()
}

pub fn extract_concepts(query: &str) -> HashSet<String> {
    let keywords = keywords(query);
    let mut concepts: HashSet<String> = keywords.iter().cloned().collect();
    for keyword in &keywords {
        for (_, related) in CONCEPT_MAP {
            if related.contains(&keyword.as_str()) {
                concepts.extend(related.iter().map(|term| term.to_string()));
            }
        }
    }
    concepts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn stop_words_and_short_tokens_dropped() {
        assert_eq!(keywords("What is my PF at work?"), vec!["work"]);
        assert!(keywords("how do i").is_empty());
    }

    #[test]
    fn expands_through_every_matching_entry() {
        let concepts = extract_concepts("Medical cover");
        // "medical" sits in both the health and sick lists.
        let expected = set(&[
            "medical", "cover", "health", "insurance", "hospital", "coverage", "sick", "illness",
            "unwell",
        ]);
        assert_eq!(concepts, expected);
    }

    #[test]
    fn multi_word_synonyms_are_kept_whole() {
        let concepts = extract_concepts("vacation");
        assert!(concepts.contains("time off"));
        assert!(concepts.contains("yearly"));
    }

    #[test]
    fn concept_names_only_expand_when_listed_as_terms() {
        // "leaves" is an entry name, not a term, so it expands nothing.
        assert_eq!(extract_concepts("leaves"), set(&["leaves"]));
    }

    #[test]
    fn empty_query_gives_empty_set() {
        assert!(extract_concepts("").is_empty());
        assert!(extract_concepts("   ").is_empty());
        assert!(extract_concepts("can I do it?").is_empty());
    }

    #[test]
    fn tokenizer_keeps_underscores_and_digits() {
        assert_eq!(tokenize("ESOP_v2, L4+"), vec!["esop_v2", "l4"]);
    }
}
