//! Reads the configured policy files from disk. Missing files are skipped so
//! the assistant can start with whatever subset is present.

use crate::models::PolicyDocument;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn load_documents(dir: &Path, files: &[String]) -> Result<Vec<PolicyDocument>, LoadError> {
    let mut docs = Vec::with_capacity(files.len());
    for name in files {
        let path = dir.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => docs.push(PolicyDocument::new(name.clone(), normalize(content))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("policy document {:?} not found, skipping", path);
            }
            Err(source) => return Err(LoadError::Read { path, source }),
        }
    }
    info!(
        "Loaded {} of {} policy documents from {:?}",
        docs.len(),
        files.len(),
        dir
    );
    Ok(docs)
}

fn normalize(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n")
    } else {
        content
    }
}
