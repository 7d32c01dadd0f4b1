//! IIIF context URIs, profiles and type names.

pub const PRESENTATION_CONTEXT: &str = "http://iiif.io/api/presentation/2/context.json";
pub const IMAGE_CONTEXT: &str = "http://iiif.io/api/image/2/context.json";
pub const IMAGE_PROTOCOL: &str = "http://iiif.io/api/image";
pub const IMAGE_LEVEL0: &str = "http://iiif.io/api/image/2/level0.json";

pub const MANIFEST: &str = "sc:Manifest";
pub const SEQUENCE: &str = "sc:Sequence";
pub const CANVAS: &str = "sc:Canvas";
pub const RANGE: &str = "sc:Range";
pub const COLLECTION: &str = "sc:Collection";
pub const ANNOTATION_LIST: &str = "sc:AnnotationList";
pub const LAYER: &str = "sc:Layer";
pub const ANNOTATION: &str = "oa:Annotation";
pub const IMAGE: &str = "dctypes:Image";

pub const PAINTING: &str = "sc:painting";
