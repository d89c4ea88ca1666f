use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub documents: DocumentConfig,
    pub search: SearchConfig,
    pub responses: ResponseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub dir: String,
    /// Loaded in this order; search ties resolve to the earlier file.
    pub files: Vec<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            dir: "data".to_string(),
            files: vec![
                "leave_policy.txt".to_string(),
                "benefits_policy.txt".to_string(),
                "workplace_policy.txt".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Sections shorter than this (trimmed, in characters) are not scored.
    pub min_section_chars: usize,
    pub header_marker: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_section_chars: 20,
            header_marker: "===".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    /// Score a section must exceed to back a "how many" or "can I" summary.
    pub summary_threshold: u32,
    /// Score a section must exceed to be quoted as a generic excerpt.
    pub excerpt_threshold: u32,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            summary_threshold: 10,
            excerpt_threshold: 15,
        }
    }
}

pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    settings = settings.add_source(
        config::Environment::with_prefix("HR_ASSISTANT")
            .separator("__")
            .try_parsing(true),
    );
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}
