use crate::models::Entry;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur while loading the bun catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid entry {id}: {reason}")]
    InvalidEntry { id: String, reason: String },

    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),
}

/// Read-only collection of buns, indexed by id
///
/// Built once at startup and shared between workers behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Load and validate a JSON catalog file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!("Loaded {} entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse and validate a JSON array of entries
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Validate entries and build the id index
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            validate_entry(entry)?;
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its image filename
    pub fn find_entry_by_id(&self, id: &str) -> Option<&Entry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }
}

fn validate_entry(entry: &Entry) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidEntry {
        id: entry.id.clone(),
        reason,
    };

    entry.validate().map_err(|e| invalid(e.to_string()))?;

    if entry.display_name.as_ref().is_some_and(|name| name.is_empty()) {
        return Err(invalid("name must not be empty".to_string()));
    }

    if let Some(source) = &entry.attribution {
        if source.url.is_empty() || source.author.is_empty() || source.platform.is_empty() {
            return Err(invalid("source needs platform, author and url".to_string()));
        }
    }

    Ok(())
}
