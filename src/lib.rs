//! # prezi
//!
//! Assembles IIIF Presentation API 2.0 documents from the metadata and page
//! structure of digitized objects.
//!
//! ## Features
//!
//! - Manifests with one canvas per physical page and ranges mirroring the
//!   table of contents
//! - Paginated collections with one level of embedded sub-collections
//! - Paginated annotation lists for annotation search
//! - Image API 2.0 level 0 `info.json` documents
//!
//! All builders are pure: they borrow already loaded inputs, compose URLs
//! through a [`UrlBuilder`], and return serializable documents.
//!
//! ## Quick Start
//!
//! ```
//! use prezi::{Metadata, ServerConfig, ServerUrls, make_label};
//!
//! let meta = Metadata::new("Faust")
//!     .with_field("creator", ["Goethe"])
//!     .with_field("pub_date", "1808");
//! assert_eq!(make_label(&meta), "Goethe: Faust (1808)");
//!
//! let urls = ServerUrls::new(&ServerConfig::new().with_server_name("iiif.example.org"));
//! let info = prezi::make_info_data("img1", &[prezi::Size::new(800, 1200)], &urls);
//! assert_eq!(info.id, "http://iiif.example.org/iiif/image/img1");
//! ```

pub mod annotation;
pub mod collection;
pub mod config;
pub mod error;
pub mod format;
pub mod image;
pub mod manifest;
pub mod model;
pub mod url;
pub mod vocab;

pub use annotation::{AnnotationList, AnnotationRecord, make_annotation_list};
pub use collection::{
    Collection, ManifestSet, ManifestSource, ManifestSummary, make_manifest_collection,
};
pub use config::ServerConfig;
pub use error::{Error, Result};
pub use format::{MetadataEntry, license_url, make_label, make_metadata};
pub use image::{ImageInfo, Size, make_info_data};
pub use manifest::{Manifest, make_manifest};
pub use model::{
    MetaValue, Metadata, Page, PhysicalMap, PhysicalPage, Record, ThumbnailMap, TocEntry,
};
pub use url::{PageId, Route, ServerUrls, UrlBuilder};
