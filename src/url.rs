//! URL composition for IIIF resources.
//!
//! Builders never format URLs themselves; they describe the target as a
//! [`Route`] and ask a [`UrlBuilder`] for the absolute URL. [`ServerUrls`] is
//! the default layout rooted at the configured scheme and server name.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::config::ServerConfig;

/// Characters escaped inside a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped inside a query key or value.
const QUERY: &AsciiSet = &SEGMENT.add(b'&').add(b'=').add(b'+').add(b';');

/// Addressable page of a collection: its landing page or a numbered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Top,
    Number(usize),
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageId::Top => f.write_str("top"),
            PageId::Number(n) => write!(f, "p{n}"),
        }
    }
}

impl From<Option<usize>> for PageId {
    fn from(page: Option<usize>) -> Self {
        page.map_or(PageId::Top, PageId::Number)
    }
}

/// Resource kinds nested under a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Sequence,
    Canvas,
    Annotation,
    Range,
}

impl PartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PartKind::Sequence => "sequence",
            PartKind::Canvas => "canvas",
            PartKind::Annotation => "annotation",
            PartKind::Range => "range",
        }
    }
}

/// A logical route plus its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Image API request for a rendition of an image
    Image {
        image_id: &'a str,
        region: &'a str,
        size: &'a str,
        rotation: &'a str,
        quality: &'a str,
        format: &'a str,
    },
    /// Image API service base (the `info.json` id)
    ImageService { image_id: &'a str },
    Manifest { manif_id: &'a str },
    ManifestPart {
        manif_id: &'a str,
        kind: PartKind,
        name: &'a str,
    },
    Collection {
        collection_id: &'a str,
        page: PageId,
    },
    /// Annotation search; `args` must not contain the page parameter
    SearchAnnotations {
        page: usize,
        args: &'a [(String, String)],
    },
}

impl<'a> Route<'a> {
    /// Full-size rendition of an image.
    pub fn full_image(image_id: &'a str) -> Self {
        Route::Image {
            image_id,
            region: "full",
            size: "full",
            rotation: "0",
            quality: "default",
            format: "jpg",
        }
    }

    /// Rendition scaled to exactly `size` (formatted `"w,h"`).
    pub fn scaled_image(image_id: &'a str, size: &'a str) -> Self {
        Route::Image {
            image_id,
            region: "full",
            size,
            rotation: "0",
            quality: "default",
            format: "jpg",
        }
    }
}

/// Maps routes to absolute URLs.
pub trait UrlBuilder {
    fn url_for(&self, route: &Route<'_>) -> String;
}

impl<U: UrlBuilder + ?Sized> UrlBuilder for &U {
    fn url_for(&self, route: &Route<'_>) -> String {
        (**self).url_for(route)
    }
}

/// Default URL layout below `scheme://server_name/iiif`.
#[derive(Debug, Clone)]
pub struct ServerUrls {
    base: String,
}

impl ServerUrls {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            base: format!("{}/iiif", config.base_url()),
        }
    }
}

impl UrlBuilder for ServerUrls {
    fn url_for(&self, route: &Route<'_>) -> String {
        let base = &self.base;
        match *route {
            Route::Image {
                image_id,
                region,
                size,
                rotation,
                quality,
                format,
            } => format!(
                "{base}/image/{}/{}/{}/{}/{}.{}",
                segment(image_id),
                segment(region),
                segment(size),
                segment(rotation),
                segment(quality),
                segment(format)
            ),
            Route::ImageService { image_id } => format!("{base}/image/{}", segment(image_id)),
            Route::Manifest { manif_id } => format!("{base}/{}/manifest", segment(manif_id)),
            Route::ManifestPart {
                manif_id,
                kind,
                name,
            } => format!(
                "{base}/{}/{}/{}",
                segment(manif_id),
                kind.as_str(),
                segment(name)
            ),
            Route::Collection {
                collection_id,
                page,
            } => format!("{base}/collection/{}/{page}", segment(collection_id)),
            Route::SearchAnnotations { page, args } => {
                let mut url = format!("{base}/annotation?p={page}");
                for (key, value) in args {
                    url.push('&');
                    url.extend(utf8_percent_encode(key, QUERY));
                    url.push('=');
                    url.extend(utf8_percent_encode(value, QUERY));
                }
                url
            }
        }
    }
}

fn segment(value: &str) -> percent_encoding::PercentEncode<'_> {
    utf8_percent_encode(value, SEGMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> ServerUrls {
        ServerUrls::new(&ServerConfig::new().with_server_name("example.org"))
    }

    #[test]
    fn image_route() {
        let url = urls().url_for(&Route::scaled_image("img 1", "100,150"));
        assert_eq!(
            url,
            "http://example.org/iiif/image/img%201/full/100,150/0/default.jpg"
        );
    }

    #[test]
    fn collection_pages() {
        let urls = urls();
        let top = urls.url_for(&Route::Collection {
            collection_id: "index",
            page: PageId::Top,
        });
        let second = urls.url_for(&Route::Collection {
            collection_id: "index",
            page: PageId::Number(2),
        });
        assert_eq!(top, "http://example.org/iiif/collection/index/top");
        assert_eq!(second, "http://example.org/iiif/collection/index/p2");
    }

    #[test]
    fn manifest_parts() {
        let url = urls().url_for(&Route::ManifestPart {
            manif_id: "abc",
            kind: PartKind::Canvas,
            name: "p1",
        });
        assert_eq!(url, "http://example.org/iiif/abc/canvas/p1");
    }

    #[test]
    fn search_query_is_encoded() {
        let args = vec![
            ("q".to_string(), "a&b c".to_string()),
            ("user".to_string(), "jo".to_string()),
        ];
        let url = urls().url_for(&Route::SearchAnnotations { page: 3, args: &args });
        assert_eq!(
            url,
            "http://example.org/iiif/annotation?p=3&q=a%26b%20c&user=jo"
        );
    }

    #[test]
    fn page_id_from_option() {
        assert_eq!(PageId::from(None), PageId::Top);
        assert_eq!(PageId::from(Some(4)).to_string(), "p4");
    }
}
