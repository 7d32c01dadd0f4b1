//! Manifest assembly tests against the serialized Presentation 2.0 shape.

use prezi::{
    Metadata, PhysicalMap, PhysicalPage, Record, ServerConfig, ServerUrls, ThumbnailMap,
    TocEntry, make_manifest,
};
use serde_json::{Value, json};

fn urls() -> ServerUrls {
    ServerUrls::new(
        &ServerConfig::new()
            .with_scheme("https")
            .with_server_name("iiif.example.org"),
    )
}

fn scans(n: usize) -> (PhysicalMap, ThumbnailMap) {
    let pages = (1..=n)
        .map(|i| PhysicalPage::new(format!("PHYS_{i:04}"), format!("img{i}"), 2000, 3000))
        .collect();
    let thumbs = (1..=n)
        .map(|i| (format!("img{i}"), (200, 300)))
        .collect();
    (pages, thumbs)
}

fn build(record: &Record, n: usize) -> Value {
    let (pages, thumbs) = scans(n);
    serde_json::to_value(make_manifest("bsb001", record, &pages, &thumbs, &urls())).unwrap()
}

#[test]
fn test_manifest_header() {
    let record = Record::new(
        Metadata::new("Faust")
            .with_field("creator", ["Goethe"])
            .with_field("pub_date", "1808")
            .with_field("license", "cc-by-sa")
            .with_field("logo", "https://example.org/logo.png")
            .with_field("urnIdentifier", "urn:nbn:de:bvb:12"),
    );
    let manifest = build(&record, 1);

    assert_eq!(manifest["@context"], "http://iiif.io/api/presentation/2/context.json");
    assert_eq!(manifest["@id"], "https://iiif.example.org/iiif/bsb001/manifest");
    assert_eq!(manifest["@type"], "sc:Manifest");
    assert_eq!(manifest["label"], "Goethe: Faust (1808)");
    assert_eq!(manifest["license"], "http://creativecommons.org/licenses/by-sa/4.0");
    assert_eq!(manifest["logo"], "https://example.org/logo.png");
    assert_eq!(manifest["description"], "");
    assert_eq!(manifest["seeAlso"], "");

    let metadata = manifest["metadata"].as_array().unwrap();
    assert_eq!(metadata.len(), 4);
    assert_eq!(metadata[0]["label"], json!({"en": "Title", "de": "Titel"}));
    assert_eq!(metadata[3], json!({"label": "urnIdentifier", "value": "urn:nbn:de:bvb:12"}));
}

#[test]
fn test_sequence_and_canvases() {
    let manifest = build(&Record::new(Metadata::new("Faust")), 3);

    let sequence = &manifest["sequences"][0];
    assert_eq!(sequence["@id"], "https://iiif.example.org/iiif/bsb001/sequence/default");
    assert_eq!(sequence["@type"], "sc:Sequence");

    let canvases = sequence["canvases"].as_array().unwrap();
    assert_eq!(canvases.len(), 3);
    for (i, canvas) in canvases.iter().enumerate() {
        let page_id = format!("p{}", i + 1);
        assert_eq!(
            canvas["@id"],
            format!("https://iiif.example.org/iiif/bsb001/canvas/{page_id}")
        );
        assert_eq!(canvas["label"], "?");
        assert_eq!(canvas["width"], 2000);
        assert_eq!(canvas["images"].as_array().unwrap().len(), 1);
        assert_eq!(canvas["images"][0]["motivation"], "sc:painting");
        assert_eq!(
            canvas["thumbnail"],
            format!(
                "https://iiif.example.org/iiif/image/img{}/full/200,300/0/default.jpg",
                i + 1
            )
        );
    }
    assert_eq!(
        canvases[0]["images"][0]["resource"]["service"]["profile"],
        "http://iiif.io/api/image/2/level0.json"
    );
}

#[test]
fn test_unlabeled_root_with_two_chapters() {
    let record = Record::new(Metadata::new("Faust")).with_toc_entry(
        TocEntry::unlabeled()
            .with_child(TocEntry::new("Erster Teil").with_page("PHYS_0001"))
            .with_child(TocEntry::new("Zweiter Teil").with_page("PHYS_0002")),
    );
    let manifest = build(&record, 2);

    assert!(manifest.get("ranges").is_none());
    let ranges = manifest["structures"].as_array().unwrap();
    assert_eq!(ranges.len(), 2);
    assert_eq!(ranges[0]["@id"], "https://iiif.example.org/iiif/bsb001/range/r0");
    assert_eq!(ranges[0]["@type"], "sc:Range");
    assert_eq!(ranges[0]["label"], "Erster Teil");
    assert_eq!(
        ranges[0]["canvases"],
        json!(["https://iiif.example.org/iiif/bsb001/canvas/p1"])
    );
    assert_eq!(ranges[1]["@id"], "https://iiif.example.org/iiif/bsb001/range/r1");
    assert_eq!(ranges[1]["canvases"].as_array().unwrap().len(), 1);
}

#[test]
fn test_unlabeled_wrappers_do_not_change_ranges() {
    let chapters = || {
        vec![
            TocEntry::new("Vorrede").with_page("PHYS_0001"),
            TocEntry::new("Hauptteil")
                .with_page("PHYS_0002")
                .with_child(TocEntry::new("Abschnitt").with_page("PHYS_0003")),
        ]
    };

    let mut flat = Record::new(Metadata::new("Faust"));
    flat.toc = chapters();

    let mut wrapper = TocEntry::unlabeled();
    wrapper.children = chapters();
    let wrapped = Record::new(Metadata::new("Faust")).with_toc_entry(wrapper);

    let flat = build(&flat, 3);
    let wrapped = build(&wrapped, 3);
    assert_eq!(flat["structures"], wrapped["structures"]);
    assert_eq!(flat["structures"][1]["canvases"].as_array().unwrap().len(), 2);
}

#[test]
fn test_no_toc_means_no_ranges() {
    let manifest = build(&Record::new(Metadata::new("Faust")), 1);
    assert!(manifest.get("structures").is_none());
    assert!(manifest.get("ranges").is_none());
}

#[test]
fn test_unknown_physical_id_is_skipped() {
    let record = Record::new(Metadata::new("Faust"))
        .with_toc_entry(TocEntry::new("Chapter").with_page("PHYS_9999").with_page("PHYS_0001"));
    let manifest = build(&record, 1);
    assert_eq!(
        manifest["structures"][0]["canvases"],
        json!(["https://iiif.example.org/iiif/bsb001/canvas/p1"])
    );
}
