//! Inline span tokenizer
//!
//! A line is scanned once with a combined pattern. At each position the
//! alternatives are tried in priority order: inline math `\(...\)`, bold
//! `**...**`, star-italic `*_..._*`, italic `_..._`, inline code `` `...` ``.
//! The scan yields flat matches with byte offsets, which are then folded into
//! [`InlineSpan`]s. Text between matches becomes `Text` verbatim.

use std::ops::Range;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use visionfmt_ir::InlineSpan;

use super::options::FormatOptions;

lazy_static! {
    static ref INLINE_PATTERN: Regex = Regex::new(concat!(
        r"\\\((?P<math>.+?)\\\)",
        r"|\*\*(?P<bold>.+?)\*\*",
        r"|\*_(?P<star_italic>.+?)_\*",
        r"|_(?P<italic>.+?)_",
        r"|`(?P<code>.+?)`",
    ))
    .expect("inline pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Math,
    Bold,
    Italic,
    Code,
}

/// One matched construct: `span` covers the delimiters, `inner` the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    pub kind: InlineKind,
    pub span: Range<usize>,
    pub inner: Range<usize>,
}

/// Find every inline construct in `line`, leftmost-first and non-overlapping.
pub fn scan(line: &str) -> Vec<InlineMatch> {
    INLINE_PATTERN
        .captures_iter(line)
        .filter_map(|caps| to_match(&caps))
        .collect()
}

fn to_match(caps: &Captures<'_>) -> Option<InlineMatch> {
    const GROUPS: [(&str, InlineKind); 5] = [
        ("math", InlineKind::Math),
        ("bold", InlineKind::Bold),
        ("star_italic", InlineKind::Italic),
        ("italic", InlineKind::Italic),
        ("code", InlineKind::Code),
    ];
    let whole = caps.get(0)?;
    GROUPS.iter().find_map(|(name, kind)| {
        caps.name(name).map(|inner| InlineMatch {
            kind: *kind,
            span: whole.range(),
            inner: inner.range(),
        })
    })
}

/// Split one line into inline spans.
pub fn tokenize(line: &str) -> Vec<InlineSpan> {
    tokenize_with_options(line, &FormatOptions::default())
}

pub fn tokenize_with_options(line: &str, options: &FormatOptions) -> Vec<InlineSpan> {
    build(line, &scan(line), options)
}

fn build(line: &str, matches: &[InlineMatch], options: &FormatOptions) -> Vec<InlineSpan> {
    if matches.is_empty() {
        return vec![InlineSpan::text(line)];
    }

    let mut spans = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;
    for m in matches {
        if m.span.start > cursor {
            spans.push(InlineSpan::text(&line[cursor..m.span.start]));
        }
        let inner = &line[m.inner.clone()];
        spans.push(match m.kind {
            InlineKind::Math => InlineSpan::InlineMath(options.render_math(inner)),
            InlineKind::Bold => InlineSpan::Bold(inner.to_string()),
            InlineKind::Italic => InlineSpan::Italic(inner.to_string()),
            InlineKind::Code => InlineSpan::Code(inner.to_string()),
        });
        cursor = m.span.end;
    }
    if cursor < line.len() {
        spans.push(InlineSpan::text(&line[cursor..]));
    }
    spans
}
