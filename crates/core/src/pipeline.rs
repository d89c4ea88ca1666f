use crate::config::{AppConfig, ResponseConfig};
use crate::loader::{self, LoadError};
use crate::models::{Intent, SearchResult};
use crate::rules::{self, Action, Rule, RuleContext};
use crate::search::SearchIndex;
use crate::{classifier, suggester};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Everything the assistant decided for one query.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub rule: &'static str,
    pub action: Action,
    pub intent: Intent,
    pub search: SearchResult,
    pub text: String,
}

/// Query pipeline over an immutable index. Cloning is cheap; clones share the
/// index and rule list.
#[derive(Debug, Clone)]
pub struct Assistant {
    index: Arc<SearchIndex>,
    rules: Arc<Vec<Rule>>,
}

impl Assistant {
    pub fn new(index: SearchIndex) -> Self {
        Self::with_config(index, &ResponseConfig::default())
    }

    pub fn with_config(index: SearchIndex, config: &ResponseConfig) -> Self {
        Self {
            index: Arc::new(index),
            rules: Arc::new(rules::cascade(config)),
        }
    }

    /// Loads the configured documents and builds the index.
    pub fn from_config(config: &AppConfig) -> Result<Self, LoadError> {
        let docs = loader::load_documents(Path::new(&config.documents.dir), &config.documents.files)?;
        let index = SearchIndex::with_config(docs, &config.search);
        Ok(Self::with_config(index, &config.responses))
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn classify_intent(&self, query: &str) -> Intent {
        classifier::classify_intent(query)
    }

    pub fn search(&self, query: &str) -> SearchResult {
        self.index.search(query)
    }

    pub fn suggestions(&self, query: &str, intent: Intent) -> [&'static str; 3] {
        suggester::suggestions(query, intent)
    }

    pub fn generate_response(&self, query: &str) -> String {
        self.answer(query).text
    }

    pub fn answer(&self, query: &str) -> Answer {
        let lowered = query.to_lowercase();
        let search = self.index.search(query);
        let intent = classifier::classify_intent(query);
        let ctx = RuleContext {
            query,
            lowered: &lowered,
            result: &search,
            header_marker: self.index.header_marker(),
        };

        let fired = rules::evaluate(&self.rules, &ctx);
        let (rule, action) = (fired.name, fired.action);
        let text = rules::render(action, &ctx);
        debug!(rule, intent = %intent, score = search.score, "answered query");

        Answer {
            rule,
            action,
            intent,
            search,
            text,
        }
    }
}
