//! Header-delimited segmentation of a full response
//!
//! The response is cut at every line that starts with a `#`, `##` or `###`
//! marker. Each section becomes a `Header` whose body is the classified
//! remainder of the section; text before the first header is classified
//! directly.

use tracing::debug;
use visionfmt_ir::{Block, Document};

use super::classify::classify_with_options;
use super::options::FormatOptions;

/// Segment a response into a document.
pub fn segment(text: &str) -> Document {
    segment_with_options(text, &FormatOptions::default())
}

pub fn segment_with_options(text: &str, options: &FormatOptions) -> Document {
    let sections = split_sections(text);
    debug!(sections = sections.len(), bytes = text.len(), "segmenting response");

    let mut blocks = Vec::new();
    for section in sections {
        let (first_line, rest) = match section.split_once('\n') {
            Some((first, rest)) => (first, rest),
            None => (section, ""),
        };
        match header_level(first_line) {
            Some((level, title)) => blocks.push(Block::Header {
                level,
                title: title.to_string(),
                body: classify_with_options(rest, options),
            }),
            None => blocks.extend(classify_with_options(section, options)),
        }
    }
    Document::new(blocks)
}

/// Split `text` before every header line. The first section may be headerless
/// and is omitted when empty.
pub fn split_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if offset > start && header_level(line).is_some() {
            sections.push(&text[start..offset]);
            start = offset;
        }
        offset += line.len();
    }
    if start < text.len() {
        sections.push(&text[start..]);
    }
    sections
}

/// Header level and title of a marker line.
///
/// Markers are tried longest first, and a marker must be followed by
/// whitespace or the end of the line, so `#### x` and `#tag` are not headers.
pub fn header_level(line: &str) -> Option<(u8, &str)> {
    let line = line.trim_end_matches(['\r', '\n']);
    for (level, marker) in [(3u8, "###"), (2, "##"), (1, "#")] {
        if let Some(rest) = line.strip_prefix(marker) {
            if rest.is_empty() || rest.starts_with([' ', '\t']) {
                return Some((level, rest.trim()));
            }
        }
    }
    None
}
