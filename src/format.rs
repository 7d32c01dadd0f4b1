//! Human-readable labels and display metadata.
//!
//! Shared by all builders: composes the display title of an object, maps
//! recognized bibliographic fields to bilingual labels, and resolves license
//! codes to license URLs.

use serde::Serialize;

use crate::model::{MetaValue, Metadata};

/// A display label in English and German.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedLabel {
    pub en: &'static str,
    pub de: &'static str,
}

const fn label(en: &'static str, de: &'static str) -> LocalizedLabel {
    LocalizedLabel { en, de }
}

/// Recognized bibliographic fields, in output order.
pub const METADATA_LABELS: &[(&str, LocalizedLabel)] = &[
    ("title", label("Title", "Titel")),
    ("language", label("Language", "Sprache")),
    ("genre", label("Genre", "Genre")),
    ("creator", label("Creator", "Urheber")),
    ("other_persons", label("Other Persons", "Andere Personen")),
    ("publisher", label("Publisher", "Veröffentlicht von")),
    ("pub_place", label("Publication Place", "Publikationsort")),
    ("pub_date", label("Publication Date", "Erscheinungsdatum")),
];

/// License codes and the URL each one asserts.
pub const LICENSES: &[(&str, &str)] = &[
    ("pdm", "http://creativecommons.org/licenses/publicdomain/"),
    ("cc0", "https://creativecommons.org/publicdomain/zero/1.0/"),
    ("cc-by", "http://creativecommons.org/licenses/by/4.0"),
    ("cc-by-sa", "http://creativecommons.org/licenses/by-sa/4.0"),
    ("cc-by-nd", "http://creativecommons.org/licenses/by-nd/4.0"),
    ("cc-by-nc", "http://creativecommons.org/licenses/by-nc/4.0"),
    ("cc-by-nc-sa", "http://creativecommons.org/licenses/by-nc-sa/4.0"),
    ("cc-by-nc-nd", "http://creativecommons.org/licenses/by-nc-nd/4.0"),
];

/// Fields whose key contains this marker are passed through verbatim.
const IDENTIFIER_MARKER: &str = "Identifier";

/// Label of a metadata entry: translated for recognized fields, the raw
/// field name otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetadataLabel {
    Localized(LocalizedLabel),
    Raw(String),
}

/// One `{label, value}` pair of a manifest's `metadata` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataEntry {
    pub label: MetadataLabel,
    pub value: MetaValue,
}

/// Compose the display label of an object.
///
/// `"<creator1>/<creator2>: <title> (<place>, <date>)"`, where the creator
/// prefix and the parenthesized suffix are each dropped when their fields
/// are absent.
pub fn make_label(metadata: &Metadata) -> String {
    let mut label = metadata.title().to_string();

    let creators: Vec<&str> = metadata.creators().collect();
    if !creators.is_empty() {
        label = format!("{}: {label}", creators.join("/"));
    }

    match (metadata.get("pub_place"), metadata.get("pub_date")) {
        (Some(place), Some(date)) => label.push_str(&format!(" ({place}, {date})")),
        (None, Some(date)) => label.push_str(&format!(" ({date})")),
        (Some(place), None) => label.push_str(&format!(" ({place})")),
        (None, None) => {}
    }

    label
}

/// Build the display metadata of an object.
///
/// Recognized fields come first, in [`METADATA_LABELS`] order, followed by
/// identifier fields in input order. Everything else is dropped.
pub fn make_metadata(metadata: &Metadata) -> Vec<MetadataEntry> {
    let recognized = METADATA_LABELS.iter().filter_map(|(key, label)| {
        metadata.get(key).map(|value| MetadataEntry {
            label: MetadataLabel::Localized(*label),
            value: value.clone(),
        })
    });

    let identifiers = metadata
        .iter()
        .filter(|(key, value)| key.contains(IDENTIFIER_MARKER) && !value.is_empty())
        .map(|(key, value)| MetadataEntry {
            label: MetadataLabel::Raw(key.to_string()),
            value: value.clone(),
        });

    recognized.chain(identifiers).collect()
}

/// Resolve a license code. Unknown or absent codes assert no license.
pub fn license_url(code: Option<&str>) -> &'static str {
    code.and_then(|code| LICENSES.iter().find(|(c, _)| *c == code))
        .map_or("", |(_, url)| *url)
}
