//! In-memory section index over the loaded policy documents.
//!
//! Documents are split once on blank lines; every query is a linear scan over
//! the cached sections. The index never changes after construction, so it can
//! be shared between sessions without locking.

use crate::config::SearchConfig;
use crate::extractor;
use crate::models::{PolicyDocument, SearchResult};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

const CONCEPT_WEIGHT: u32 = 2;
const PHRASE_BONUS: u32 = 5;
const HEADER_BONUS: u32 = 3;

#[derive(Debug, Clone)]
pub struct Section {
    pub text: String,
    lower: String,
    header: bool,
}

#[derive(Debug, Clone)]
struct IndexedDocument {
    label: String,
    sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub name: String,
    pub label: String,
    pub sections: usize,
}

#[derive(Debug, Clone)]
pub struct SearchIndex {
    documents: Vec<IndexedDocument>,
    summaries: Vec<DocumentSummary>,
    header_marker: String,
}

impl SearchIndex {
    pub fn new(documents: Vec<PolicyDocument>) -> Self {
        Self::with_config(documents, &SearchConfig::default())
    }

    pub fn with_config(documents: Vec<PolicyDocument>, config: &SearchConfig) -> Self {
        let mut indexed = Vec::with_capacity(documents.len());
        let mut summaries = Vec::with_capacity(documents.len());
        for doc in documents {
            let label = doc.source_label();
            let sections =
                split_sections(&doc.content, config.min_section_chars, &config.header_marker);
            summaries.push(DocumentSummary {
                name: doc.name,
                label: label.clone(),
                sections: sections.len(),
            });
            indexed.push(IndexedDocument { label, sections });
        }
        Self {
            documents: indexed,
            summaries,
            header_marker: config.header_marker.clone(),
        }
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn section_count(&self) -> usize {
        self.documents.iter().map(|d| d.sections.len()).sum()
    }

    pub fn documents(&self) -> &[DocumentSummary] {
        &self.summaries
    }

    pub fn header_marker(&self) -> &str {
        &self.header_marker
    }

    /// Highest-scoring section for `query`. Ties keep the earliest section in
    /// document order; no positive score yields [`SearchResult::empty`], as
    /// does a blank query.
    pub fn search(&self, query: &str) -> SearchResult {
        if query.trim().is_empty() {
            return SearchResult::empty();
        }
        let concepts = extractor::extract_concepts(query);
        let phrases = query_phrases(query);

        let mut best: Option<(&Section, &str)> = None;
        let mut best_score = 0;
        for doc in &self.documents {
            for section in &doc.sections {
                let score = score_section(section, &concepts, &phrases);
                if score > best_score {
                    best_score = score;
                    best = Some((section, doc.label.as_str()));
                }
            }
        }

        match best {
            Some((section, label)) => {
                debug!(score = best_score, source = label, "best matching section");
                SearchResult {
                    text: section.text.clone(),
                    source: label.to_string(),
                    score: best_score,
                }
            }
            None => SearchResult::empty(),
        }
    }
}

/// Blank-line delimited sections, dropping those shorter than `min_chars`
/// once trimmed.
pub fn split_sections(content: &str, min_chars: usize, header_marker: &str) -> Vec<Section> {
    content
        .split("\n\n")
        .filter(|s| s.trim().chars().count() >= min_chars)
        .map(|s| Section {
            text: s.to_string(),
            lower: s.to_lowercase(),
            header: s.starts_with(header_marker),
        })
        .collect()
}

/// Adjacent word pairs of the lowercased query.
fn query_phrases(query: &str) -> Vec<String> {
    let lower = query.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    words.windows(2).map(|pair| pair.join(" ")).collect()
}

fn score_section(section: &Section, concepts: &HashSet<String>, phrases: &[String]) -> u32 {
    let mut score = 0u32;
    for concept in concepts {
        let occurrences = section.lower.matches(concept.as_str()).count() as u32;
        score += occurrences * CONCEPT_WEIGHT;
    }
    for phrase in phrases {
        if section.lower.contains(phrase.as_str()) {
            score += PHRASE_BONUS;
        }
    }
    if section.header {
        score += HEADER_BONUS;
    }
    score
}
