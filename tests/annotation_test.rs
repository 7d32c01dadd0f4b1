//! Annotation list paging tests.

use prezi::{AnnotationRecord, Page, ServerConfig, ServerUrls, make_annotation_list};
use serde_json::{Value, json};

fn annotations(n: usize) -> Vec<AnnotationRecord> {
    (0..n)
        .map(|i| {
            AnnotationRecord::from(json!({
                "@id": format!("http://localhost:5000/iiif/annotation/a{i}"),
                "@type": "oa:Annotation",
                "motivation": "oa:commenting"
            }))
        })
        .collect()
}

fn search(page: usize, args: &[(&str, &str)]) -> Value {
    let urls = ServerUrls::new(&ServerConfig::default());
    let args: Vec<(String, String)> = args
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let pagination = Page::from_slice(&annotations(25), page, 10);
    let list = make_annotation_list(&pagination, "http://localhost:5000/iiif/annotation?q=x", &args, &urls);
    serde_json::to_value(list).unwrap()
}

#[test]
fn test_layer_envelope() {
    let list = search(1, &[("q", "faust"), ("motivation", "oa:commenting"), ("p", "1")]);

    assert_eq!(list["@id"], "http://localhost:5000/iiif/annotation?q=x");
    assert_eq!(list["@type"], "sc:AnnotationList");
    assert_eq!(list["within"]["total"], 25);
    assert_eq!(
        list["within"]["first"],
        "http://localhost:5000/iiif/annotation?p=1&q=faust&motivation=oa:commenting"
    );
    assert_eq!(
        list["within"]["last"],
        "http://localhost:5000/iiif/annotation?p=3&q=faust&motivation=oa:commenting"
    );
    assert_eq!(list["within"]["ignored"], json!([]));
}

#[test]
fn test_next_and_prev_are_distinct() {
    let middle = search(2, &[("q", "faust"), ("p", "2")]);
    assert_eq!(middle["next"], "http://localhost:5000/iiif/annotation?p=3&q=faust");
    assert_eq!(middle["prev"], "http://localhost:5000/iiif/annotation?p=1&q=faust");

    let first = search(1, &[("q", "faust")]);
    assert!(first.get("prev").is_none());
    assert!(first.get("next").is_some());

    let last = search(3, &[("q", "faust"), ("p", "3")]);
    assert!(last.get("next").is_none());
    assert_eq!(last["startIndex"], 20);
    assert_eq!(last["resources"].as_array().unwrap().len(), 5);
}

#[test]
fn test_resources_are_verbatim() {
    let list = search(1, &[]);
    assert_eq!(
        list["resources"][0],
        json!({
            "@id": "http://localhost:5000/iiif/annotation/a0",
            "@type": "oa:Annotation",
            "motivation": "oa:commenting"
        })
    );
}

#[test]
fn test_ignored_params() {
    let list = search(1, &[("q", "x"), ("canvas", "c1"), ("date", "2017")]);
    assert_eq!(list["within"]["ignored"], json!(["canvas"]));
    assert_eq!(
        list["within"]["first"],
        "http://localhost:5000/iiif/annotation?p=1&q=x&canvas=c1&date=2017"
    );
}

#[test]
fn test_huge_page_number() {
    let list = search(usize::MAX, &[("q", "faust")]);
    assert_eq!(list["startIndex"], json!(usize::MAX));
    assert_eq!(list["resources"], json!([]));
    assert!(list.get("next").is_none());
}
