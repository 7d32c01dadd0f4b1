//! Table of contents to range mapping.
//!
//! Walks the TOC forest in pre-order. Every labelled entry yields one range
//! holding the canvases of its own pages followed by those of all its
//! descendants. Range numbers are handed out in walk order and only advance
//! when a range is created, so unlabelled entries leave no gaps.

use std::collections::HashMap;

use tracing::warn;

use crate::model::TocEntry;

/// Entries nested deeper than this are not visited.
pub const MAX_TOC_DEPTH: usize = 64;

/// A range derived from one labelled TOC entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocRange {
    /// Sequential range number (`r<index>`)
    pub index: usize,
    pub label: String,
    /// Canvas ids, depth-first
    pub canvases: Vec<String>,
}

/// Derive ranges for a TOC forest.
///
/// `phys_to_canvas` maps physical page ids to canvas ids; page ids without
/// a canvas are logged and left out.
pub fn toc_ranges(entries: &[TocEntry], phys_to_canvas: &HashMap<&str, String>) -> Vec<TocRange> {
    let (_, ranges) = fold_ranges(entries, phys_to_canvas, 0, (0, Vec::new()));
    ranges
}

/// Fold a sibling list into `(next_index, ranges)`.
fn fold_ranges(
    entries: &[TocEntry],
    phys_to_canvas: &HashMap<&str, String>,
    depth: usize,
    acc: (usize, Vec<TocRange>),
) -> (usize, Vec<TocRange>) {
    if depth >= MAX_TOC_DEPTH {
        if !entries.is_empty() {
            warn!(depth, "Table of contents too deep, skipping {} entries", entries.len());
        }
        return acc;
    }

    entries.iter().fold(acc, |(index, mut ranges), entry| {
        let next = match entry.label() {
            Some(label) => {
                ranges.push(TocRange {
                    index,
                    label: label.to_string(),
                    canvases: collect_canvases(entry, phys_to_canvas, depth),
                });
                index + 1
            }
            None => index,
        };
        fold_ranges(&entry.children, phys_to_canvas, depth + 1, (next, ranges))
    })
}

/// Canvases of an entry's own pages, then of its children, depth-first.
fn collect_canvases(
    entry: &TocEntry,
    phys_to_canvas: &HashMap<&str, String>,
    depth: usize,
) -> Vec<String> {
    let mut canvases = Vec::new();
    push_canvases(entry, phys_to_canvas, depth, &mut canvases);
    canvases
}

fn push_canvases(
    entry: &TocEntry,
    phys_to_canvas: &HashMap<&str, String>,
    depth: usize,
    canvases: &mut Vec<String>,
) {
    for phys_id in &entry.phys_ids {
        match phys_to_canvas.get(phys_id.as_str()) {
            Some(canvas) => canvases.push(canvas.clone()),
            None => warn!("Could not find a matching canvas for {phys_id}"),
        }
    }
    if depth + 1 >= MAX_TOC_DEPTH {
        return;
    }
    for child in &entry.children {
        push_canvases(child, phys_to_canvas, depth + 1, canvases);
    }
}
