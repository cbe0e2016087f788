//! Load site content from a JSON file
//!
//! The file mirrors the `SiteContent` JSON shape (camelCase keys, tender
//! `ref`/`closing` fields, ISO dates).

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use thiserror::Error;

use super::SiteContent;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate tender reference: {0}")]
    DuplicateTender(String),

    #[error("navigation group '{0}' has no links")]
    EmptyNavGroup(String),
}

impl SiteContent {
    /// Reject content the site cannot render sensibly
    pub fn validate(&self) -> Result<(), ContentError> {
        if let Some(group) = self.nav_links.iter().find(|g| g.items.is_empty()) {
            return Err(ContentError::EmptyNavGroup(group.title.clone()));
        }

        let mut seen = HashSet::new();
        for tender in &self.tenders {
            if !seen.insert(tender.reference.as_str()) {
                return Err(ContentError::DuplicateTender(tender.reference.clone()));
            }
        }
        Ok(())
    }
}

/// Load and validate content from a JSON file
pub fn load_content<P: AsRef<Path>>(path: P) -> Result<SiteContent, ContentError> {
    let file = File::open(path.as_ref())?;
    let content = load_content_from_reader(BufReader::new(file))?;
    info!(
        "Loaded site content from {} ({} tenders, {} resources)",
        path.as_ref().display(),
        content.tenders.len(),
        content.resources.len()
    );
    Ok(content)
}

pub fn load_content_from_reader<R: Read>(reader: R) -> Result<SiteContent, ContentError> {
    let content: SiteContent = serde_json::from_reader(reader)?;
    content.validate()?;
    Ok(content)
}
