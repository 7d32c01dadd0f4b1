//! Paginated annotation search results.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::model::Page;
use crate::url::{Route, UrlBuilder};
use crate::vocab;

/// Query parameter carrying the page number.
pub const PAGE_PARAM: &str = "p";

/// Query parameters the annotation search honours.
pub const RECOGNIZED_PARAMS: &[&str] = &["q", "motivation", "date", "user", PAGE_PARAM];

/// A stored annotation, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationRecord {
    pub annotation: Value,
}

impl From<Value> for AnnotationRecord {
    fn from(annotation: Value) -> Self {
        Self { annotation }
    }
}

/// The search context an annotation list page belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub total: usize,
    pub first: String,
    pub last: String,
    /// Request parameters that were not applied
    pub ignored: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub within: Layer,
    #[serde(rename = "startIndex")]
    pub start_index: usize,
    pub resources: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Build one page of annotation search results.
///
/// Navigation links repeat every request parameter except the page number.
pub fn make_annotation_list<U: UrlBuilder + ?Sized>(
    pagination: &Page<AnnotationRecord>,
    request_url: &str,
    request_args: &[(String, String)],
    urls: &U,
) -> AnnotationList {
    let args: Vec<(String, String)> = request_args
        .iter()
        .filter(|(key, _)| key != PAGE_PARAM)
        .cloned()
        .collect();
    let link = |page: usize| urls.url_for(&Route::SearchAnnotations { page, args: &args });

    let mut ignored: Vec<String> = Vec::new();
    for (key, _) in request_args {
        if !RECOGNIZED_PARAMS.contains(&key.as_str()) && !ignored.contains(key) {
            ignored.push(key.clone());
        }
    }

    debug!(
        total = pagination.total,
        page = pagination.page,
        ignored = ignored.len(),
        "Assembled annotation list"
    );

    AnnotationList {
        context: vocab::PRESENTATION_CONTEXT,
        id: request_url.to_string(),
        kind: vocab::ANNOTATION_LIST,
        within: Layer {
            kind: vocab::LAYER,
            total: pagination.total,
            first: link(1),
            last: link(pagination.pages()),
            ignored,
        },
        start_index: pagination.start_index(),
        resources: pagination
            .items
            .iter()
            .map(|a| a.annotation.clone())
            .collect(),
        next: pagination.next_num().map(&link),
        prev: pagination.prev_num().map(&link),
    }
}
