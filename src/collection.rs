//! Paginated Presentation API 2.0 collections.
//!
//! Every collection has a landing page (`top`) that only carries the total
//! and `first`/`last` links, and numbered pages (`p1`, `p2`, ...) that list
//! manifests. Page 1 additionally embeds the landing pages of the
//! collection's non-empty sub-collections.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::model::Page;
use crate::url::{PageId, Route, UrlBuilder};
use crate::vocab;

/// Identifier of the root collection all others are `within`.
pub const INDEX_COLLECTION: &str = "index";

/// A stored manifest as listed in a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestSummary {
    pub id: String,
    pub label: String,
    /// The stored manifest document
    pub manifest: Value,
}

impl ManifestSummary {
    pub fn new(id: impl Into<String>, label: impl Into<String>, manifest: Value) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            manifest,
        }
    }

    pub fn from_manifest(id: impl Into<String>, manifest: &Manifest) -> Result<Self> {
        Ok(Self::new(
            id,
            manifest.label.clone(),
            serde_json::to_value(manifest)?,
        ))
    }

    /// The manifest's own thumbnail, else the first canvas's.
    pub fn thumbnail(&self) -> Option<&Value> {
        self.manifest
            .get("thumbnail")
            .or_else(|| self.manifest.pointer("/sequences/0/canvases/0/thumbnail"))
    }

    fn field(&self, key: &str) -> Option<Value> {
        self.manifest.get(key).cloned()
    }
}

/// A set of manifests that can be paginated on demand.
pub trait ManifestSource {
    fn id(&self) -> &str;
    fn label(&self) -> &str;
    /// Number of manifests in the set.
    fn count(&self) -> usize;
    fn paginate(&self, page: usize, per_page: usize) -> Page<ManifestSummary>;
}

/// An in-memory [`ManifestSource`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestSet {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub manifests: Vec<ManifestSummary>,
}

impl ManifestSet {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            manifests: Vec::new(),
        }
    }

    pub fn with_manifest(mut self, manifest: ManifestSummary) -> Self {
        self.manifests.push(manifest);
        self
    }
}

impl ManifestSource for ManifestSet {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn count(&self) -> usize {
        self.manifests.len()
    }

    fn paginate(&self, page: usize, per_page: usize) -> Page<ManifestSummary> {
        Page::from_slice(&self.manifests, page, per_page)
    }
}

/// Manifest entry of a collection page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestRef {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub total: usize,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(rename = "startIndex", skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifests: Option<Vec<ManifestRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<Collection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Build one page of a collection.
///
/// `page_num` of `None` builds the landing page. When building page 1 with
/// `subcollections`, each non-empty sub-collection is embedded as its own
/// landing page, paginated with `config.items_per_page`; those are never
/// given sub-collections of their own.
pub fn make_manifest_collection<S, U>(
    pagination: &Page<ManifestSummary>,
    subcollections: Option<&[S]>,
    label: &str,
    collection_id: &str,
    page_num: Option<usize>,
    urls: &U,
    config: &ServerConfig,
) -> Collection
where
    S: ManifestSource,
    U: UrlBuilder + ?Sized,
{
    let mut collection = collection_page(pagination, label, collection_id, page_num, urls);

    if page_num == Some(1)
        && let Some(subcollections) = subcollections
        && !subcollections.is_empty()
    {
        let nested: Vec<Collection> = subcollections
            .iter()
            .filter(|coll| coll.count() > 0)
            .map(|coll| {
                let page = coll.paginate(1, config.items_per_page);
                collection_page(&page, coll.label(), coll.id(), None, urls)
            })
            .collect();
        collection.collections = Some(nested);
    }

    collection
}

/// One collection page without sub-collections.
fn collection_page<U: UrlBuilder + ?Sized>(
    pagination: &Page<ManifestSummary>,
    label: &str,
    collection_id: &str,
    page_num: Option<usize>,
    urls: &U,
) -> Collection {
    let link = |page: PageId| {
        urls.url_for(&Route::Collection {
            collection_id,
            page,
        })
    };
    let page_id = PageId::from(page_num);

    let mut collection = Collection {
        context: vocab::PRESENTATION_CONTEXT,
        id: link(page_id),
        kind: vocab::COLLECTION,
        total: pagination.total,
        label: label.to_string(),
        within: None,
        first: None,
        last: None,
        start_index: None,
        manifests: None,
        collections: None,
        next: None,
        prev: None,
    };

    match page_id {
        PageId::Top => {
            if collection_id != INDEX_COLLECTION {
                collection.within = Some(urls.url_for(&Route::Collection {
                    collection_id: INDEX_COLLECTION,
                    page: PageId::Top,
                }));
            }
            collection.first = Some(link(PageId::Number(1)));
            collection.last = Some(link(PageId::Number(pagination.pages())));
        }
        PageId::Number(_) => {
            collection.within = Some(link(PageId::Top));
            collection.start_index = Some(pagination.start_index());
            collection.manifests = Some(
                pagination
                    .items
                    .iter()
                    .map(|m| manifest_ref(m, urls))
                    .collect(),
            );
            collection.next = pagination.next_num().map(|n| link(PageId::Number(n)));
            collection.prev = pagination.prev_num().map(|n| link(PageId::Number(n)));
        }
    }

    debug!(collection_id, page = %page_id, total = pagination.total, "Assembled collection page");
    collection
}

fn manifest_ref<U: UrlBuilder + ?Sized>(summary: &ManifestSummary, urls: &U) -> ManifestRef {
    ManifestRef {
        id: urls.url_for(&Route::Manifest {
            manif_id: &summary.id,
        }),
        kind: vocab::MANIFEST,
        label: summary.label.clone(),
        attribution: summary.field("attribution"),
        logo: summary.field("logo"),
        thumbnail: summary.thumbnail().cloned(),
    }
}
