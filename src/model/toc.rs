use serde::{Deserialize, Serialize};

/// A table of contents entry (hierarchical).
///
/// An entry without a label is transparent: it yields no range of its own,
/// but its children are still visited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Physical page ids spanned by this entry itself
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phys_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn unlabeled() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, phys_id: impl Into<String>) -> Self {
        self.phys_ids.push(phys_id.into());
        self
    }

    pub fn with_child(mut self, child: TocEntry) -> Self {
        self.children.push(child);
        self
    }

    /// The display label, if present and non-empty.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }
}
