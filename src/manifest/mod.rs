//! Presentation API 2.0 manifests.
//!
//! A manifest describes one digitized object: its display label and
//! metadata, one sequence with a canvas per physical page, and a range per
//! labelled table of contents entry.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use prezi::{Metadata, PhysicalMap, PhysicalPage, Record, ServerConfig, ServerUrls, TocEntry};
//! use prezi::manifest::make_manifest;
//!
//! let record = Record::new(Metadata::new("Faust").with_field("creator", ["Goethe"]))
//!     .with_toc_entry(TocEntry::new("Zueignung").with_page("phys1"));
//! let pages: PhysicalMap = vec![PhysicalPage::new("phys1", "img1", 1600, 2400)].into();
//! let thumbs = HashMap::from([("img1".to_string(), (100, 150))]);
//! let urls = ServerUrls::new(&ServerConfig::default());
//!
//! let manifest = make_manifest("faust", &record, &pages, &thumbs, &urls);
//! assert_eq!(manifest.label, "Goethe: Faust");
//! assert_eq!(manifest.ranges.len(), 1);
//! ```

mod ranges;

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::format::{MetadataEntry, license_url, make_label, make_metadata};
use crate::image::ImageService;
use crate::model::{PhysicalMap, PhysicalPage, Record, ThumbnailMap};
use crate::url::{PartKind, Route, UrlBuilder};
use crate::vocab;

pub use ranges::{MAX_TOC_DEPTH, TocRange, toc_ranges};

/// Label given to canvases of pages without one.
pub const UNKNOWN_PAGE_LABEL: &str = "?";

/// Identifier of the single sequence of a manifest.
pub const DEFAULT_SEQUENCE: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub label: String,
    pub metadata: Vec<MetadataEntry>,
    pub description: String,
    #[serde(rename = "seeAlso")]
    pub see_also: String,
    pub related: String,
    pub attribution: String,
    pub logo: String,
    pub license: String,
    pub sequences: Vec<Sequence>,
    /// Table of contents, serialized as `structures`
    #[serde(rename = "structures", skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<Range>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sequence {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub canvases: Vec<Canvas>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Canvas {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub label: String,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub images: Vec<Annotation>,
}

/// Painting annotation placing an image on a canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub motivation: &'static str,
    pub on: String,
    pub resource: ImageResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageResource {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub format: &'static str,
    pub width: u32,
    pub height: u32,
    pub service: ImageService,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Range {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub label: String,
    pub canvases: Vec<String>,
}

/// Build the manifest of one described object.
///
/// Canvases follow the order of `pages`. A page whose image has no entry in
/// `thumbs` gets no thumbnail.
pub fn make_manifest<U: UrlBuilder + ?Sized>(
    ident: &str,
    record: &Record,
    pages: &PhysicalMap,
    thumbs: &ThumbnailMap,
    urls: &U,
) -> Manifest {
    let meta = &record.metadata;
    let part = |kind: PartKind, name: &str| {
        urls.url_for(&Route::ManifestPart {
            manif_id: ident,
            kind,
            name,
        })
    };

    let mut phys_to_canvas: HashMap<&str, String> = HashMap::with_capacity(pages.len());
    let mut canvases = Vec::with_capacity(pages.len());
    for (idx, page) in pages.iter().enumerate() {
        let page_id = format!("p{}", idx + 1);
        let canvas = make_canvas(
            page,
            part(PartKind::Canvas, &page_id),
            part(PartKind::Annotation, &page_id),
            thumbs,
            urls,
        );
        phys_to_canvas.insert(page.id.as_str(), canvas.id.clone());
        canvases.push(canvas);
    }

    let ranges: Vec<Range> = toc_ranges(&record.toc, &phys_to_canvas)
        .into_iter()
        .map(|range| Range {
            id: part(PartKind::Range, &format!("r{}", range.index)),
            kind: vocab::RANGE,
            label: range.label,
            canvases: range.canvases,
        })
        .collect();

    debug!(
        ident,
        canvases = canvases.len(),
        ranges = ranges.len(),
        "Assembled manifest"
    );

    let text = |key: &str| meta.get(key).map(ToString::to_string).unwrap_or_default();

    Manifest {
        context: vocab::PRESENTATION_CONTEXT,
        id: urls.url_for(&Route::Manifest { manif_id: ident }),
        kind: vocab::MANIFEST,
        label: make_label(meta),
        metadata: make_metadata(meta),
        description: text("description"),
        see_also: text("see_also"),
        related: text("related"),
        attribution: text("attribution"),
        logo: text("logo"),
        license: license_url(meta.text("license")).to_string(),
        sequences: vec![Sequence {
            id: part(PartKind::Sequence, DEFAULT_SEQUENCE),
            kind: vocab::SEQUENCE,
            canvases,
        }],
        ranges,
    }
}

fn make_canvas<U: UrlBuilder + ?Sized>(
    page: &PhysicalPage,
    canvas_id: String,
    annotation_id: String,
    thumbs: &ThumbnailMap,
    urls: &U,
) -> Canvas {
    let thumbnail = match thumbs.get(&page.image_id) {
        Some((width, height)) => {
            let size = format!("{width},{height}");
            Some(urls.url_for(&Route::scaled_image(&page.image_id, &size)))
        }
        None => {
            warn!("No thumbnail size for image {}", page.image_id);
            None
        }
    };

    let resource = ImageResource {
        id: urls.url_for(&Route::full_image(&page.image_id)),
        kind: vocab::IMAGE,
        format: "image/jpeg",
        width: page.width,
        height: page.height,
        service: ImageService::level0(urls.url_for(&Route::ImageService {
            image_id: &page.image_id,
        })),
    };

    Canvas {
        label: page
            .label
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(UNKNOWN_PAGE_LABEL)
            .to_string(),
        width: page.width,
        height: page.height,
        thumbnail,
        images: vec![Annotation {
            id: annotation_id,
            kind: vocab::ANNOTATION,
            motivation: vocab::PAINTING,
            on: canvas_id.clone(),
            resource,
        }],
        id: canvas_id,
        kind: vocab::CANVAS,
    }
}
