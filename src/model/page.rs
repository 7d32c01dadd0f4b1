//! Physical page structure of a digitized object.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Thumbnail (width, height) per image id.
pub type ThumbnailMap = HashMap<String, (u32, u32)>;

/// One physical page (scan) of the object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalPage {
    /// Physical id, referenced by TOC entries
    pub id: String,
    pub image_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl PhysicalPage {
    pub fn new(id: impl Into<String>, image_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            image_id: image_id.into(),
            label: None,
            width,
            height,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Pages in reading order, keyed by physical id.
///
/// Order defines the canvas order of the manifest. Inserting a page whose id
/// is already present replaces it without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PhysicalPage>", into = "Vec<PhysicalPage>")]
pub struct PhysicalMap {
    pages: Vec<PhysicalPage>,
    /// Physical id -> position in `pages`
    index: HashMap<String, usize>,
}

impl PhysicalMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, page: PhysicalPage) {
        match self.index.get(&page.id) {
            Some(&pos) => self.pages[pos] = page,
            None => {
                self.index.insert(page.id.clone(), self.pages.len());
                self.pages.push(page);
            }
        }
    }

    pub fn with_page(mut self, page: PhysicalPage) -> Self {
        self.insert(page);
        self
    }

    pub fn get(&self, id: &str) -> Option<&PhysicalPage> {
        self.index.get(id).map(|&pos| &self.pages[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhysicalPage> {
        self.pages.iter()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl From<Vec<PhysicalPage>> for PhysicalMap {
    fn from(pages: Vec<PhysicalPage>) -> Self {
        pages.into_iter().collect()
    }
}

impl From<PhysicalMap> for Vec<PhysicalPage> {
    fn from(map: PhysicalMap) -> Self {
        map.pages
    }
}

impl FromIterator<PhysicalPage> for PhysicalMap {
    fn from_iter<I: IntoIterator<Item = PhysicalPage>>(iter: I) -> Self {
        let mut map = PhysicalMap::new();
        for page in iter {
            map.insert(page);
        }
        map
    }
}

impl<'a> IntoIterator for &'a PhysicalMap {
    type Item = &'a PhysicalPage;
    type IntoIter = std::slice::Iter<'a, PhysicalPage>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
