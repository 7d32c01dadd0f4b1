use serde::{Deserialize, Serialize};

use super::{Metadata, TocEntry};
use crate::error::{Error, Result};

/// One described object as handed over by the METS/MODS layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub metadata: Metadata,
    #[serde(default)]
    pub toc: Vec<TocEntry>,
}

impl Record {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            toc: Vec::new(),
        }
    }

    pub fn with_toc_entry(mut self, entry: TocEntry) -> Self {
        self.toc.push(entry);
        self
    }

    /// Check that the record carries a primary title.
    ///
    /// The builders never fail on a missing title; callers loading records
    /// from untrusted sources should check this first.
    pub fn validate(&self, ident: &str) -> Result<()> {
        if self.metadata.title().is_empty() {
            return Err(Error::MissingTitle(ident.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_requires_title() {
        let record: Record = serde_json::from_str(r#"{"metadata": {"creator": ["X"]}}"#).unwrap();
        assert!(matches!(record.validate("obj"), Err(Error::MissingTitle(id)) if id == "obj"));
        assert!(Record::new(Metadata::new("Faust")).validate("obj").is_ok());
    }

    #[test]
    fn toc_defaults_to_empty() {
        let record: Record = serde_json::from_str(r#"{"metadata": {"title": ["T"]}}"#).unwrap();
        assert!(record.toc.is_empty());
    }
}
