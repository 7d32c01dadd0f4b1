//! Image API 2.0 documents for images served as fixed renditions.

use serde::{Deserialize, Serialize};

use crate::url::{Route, UrlBuilder};
use crate::vocab;

/// Pixel dimensions of one rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Image service reference embedded in image resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageService {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub profile: &'static str,
}

impl ImageService {
    pub fn level0(id: String) -> Self {
        Self {
            context: vocab::IMAGE_CONTEXT,
            id,
            profile: vocab::IMAGE_LEVEL0,
        }
    }
}

/// An `info.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub protocol: &'static str,
    pub profile: Vec<&'static str>,
    pub width: u32,
    pub height: u32,
    pub sizes: Vec<Size>,
}

/// Build the level 0 `info.json` for an image available in `sizes`.
///
/// The advertised full size is the largest width and the largest height
/// over all renditions, taken independently.
pub fn make_info_data<U: UrlBuilder + ?Sized>(
    identifier: &str,
    sizes: &[Size],
    urls: &U,
) -> ImageInfo {
    let width = sizes.iter().map(|s| s.width).max().unwrap_or(0);
    let height = sizes.iter().map(|s| s.height).max().unwrap_or(0);

    ImageInfo {
        context: vocab::IMAGE_CONTEXT,
        id: urls.url_for(&Route::ImageService {
            image_id: identifier,
        }),
        protocol: vocab::IMAGE_PROTOCOL,
        profile: vec![vocab::IMAGE_LEVEL0],
        width,
        height,
        sizes: sizes.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::url::ServerUrls;

    #[test]
    fn max_dimensions_are_independent() {
        let urls = ServerUrls::new(&ServerConfig::default());
        let sizes = [Size::new(1000, 500), Size::new(400, 1200), Size::new(200, 300)];
        let info = make_info_data("img1", &sizes, &urls);

        assert_eq!((info.width, info.height), (1000, 1200));
        assert_eq!(info.sizes.len(), 3);
        assert_eq!(info.id, "http://localhost:5000/iiif/image/img1");
    }

    #[test]
    fn info_json_shape() {
        let urls = ServerUrls::new(&ServerConfig::default());
        let info = make_info_data("img1", &[Size::new(10, 20)], &urls);
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["@context"], vocab::IMAGE_CONTEXT);
        assert_eq!(json["protocol"], "http://iiif.io/api/image");
        assert_eq!(json["profile"][0], vocab::IMAGE_LEVEL0);
        assert_eq!(json["sizes"][0]["height"], 20);
    }

    #[test]
    fn no_sizes() {
        let urls = ServerUrls::new(&ServerConfig::default());
        let info = make_info_data("img1", &[], &urls);
        assert_eq!((info.width, info.height), (0, 0));
    }
}
