//! Per-user conversation state kept by the front end: message history,
//! per-intent query counts, and transcript export.

use chrono::{DateTime, TimeZone};
use hr_assistant_core::{Assistant, Intent};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

pub const QUICK_QUERIES: [&str; 4] = [
    "How many annual leaves do I get?",
    "What's the health insurance coverage?",
    "Can I work from home?",
    "What's the notice period?",
];

const TRANSCRIPT_TITLE: &str = "ROOMAN HR ASSISTANT - CONVERSATION HISTORY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    fn heading(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Assistant => "ASSISTANT",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub total_queries: u32,
    pub by_intent: BTreeMap<Intent, u32>,
    pub topics: Vec<Intent>,
    pub total_interactions: u32,
    pub engagement: f64,
    pub engagement_label: &'static str,
}

pub struct Session {
    assistant: Assistant,
    messages: Vec<Message>,
    counts: BTreeMap<Intent, u32>,
    topics: BTreeSet<Intent>,
    interactions: u32,
}

impl Session {
    pub fn new(assistant: Assistant) -> Self {
        let counts = Intent::ALL.iter().map(|i| (*i, 0)).collect();
        Self {
            assistant,
            messages: Vec::new(),
            counts,
            topics: BTreeSet::new(),
            interactions: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Answers one query and records both sides of the exchange. Blank input
    /// is ignored and returns `None`.
    pub fn ask(&mut self, query: &str) -> Option<String> {
        if query.trim().is_empty() {
            return None;
        }
        self.messages.push(Message {
            role: Role::User,
            content: query.to_string(),
        });

        let intent = self.assistant.classify_intent(query);
        *self.counts.entry(intent).or_insert(0) += 1;
        self.interactions += 1;
        self.topics.insert(intent);

        let mut response = self.assistant.generate_response(query);
        response.push_str("\n\n**💡 Related Questions:**\n");
        for (i, suggestion) in self.assistant.suggestions(query, intent).iter().enumerate() {
            response.push_str(&format!("\n{}. {}", i + 1, suggestion));
        }

        self.messages.push(Message {
            role: Role::Assistant,
            content: response.clone(),
        });
        Some(response)
    }

    /// Drops the conversation history; analytics are kept.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn stats(&self) -> SessionStats {
        let total: u32 = self.counts.values().sum();
        let engagement = if total > 0 {
            (total as f64 / 10.0 * 100.0).min(100.0)
        } else {
            0.0
        };
        let engagement_label = if engagement > 70.0 {
            "Excellent!"
        } else if engagement > 40.0 {
            "Good!"
        } else {
            "Just getting started"
        };
        SessionStats {
            total_queries: total,
            by_intent: self.counts.clone(),
            topics: self.topics.iter().copied().collect(),
            total_interactions: self.interactions,
            engagement,
            engagement_label,
        }
    }

    pub fn transcript(&self) -> String {
        let mut out = format!("{}\n{}\n\n", TRANSCRIPT_TITLE, "=".repeat(50));
        for msg in &self.messages {
            out.push_str(&format!("{}:\n{}\n\n", msg.role.heading(), msg.content));
        }
        out
    }
}

pub fn export_file_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("hr_conversation_{}.txt", now.format("%Y%m%d_%H%M%S"))
}
