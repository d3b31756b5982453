//! Line classification for section bodies
//!
//! Every non-blank line becomes exactly one block. A line is tested for
//! display math first, then for a boxed final answer, and otherwise falls
//! through to an inline-tokenized paragraph.

use tracing::trace;
use visionfmt_ir::Block;

use super::inline::tokenize_with_options;
use super::options::FormatOptions;

const DISPLAY_OPEN: &str = r"\[";
const DISPLAY_CLOSE: &str = r"\]";
const BOXED_OPEN: &str = r"$\boxed{";
const BOXED_CLOSE: &str = "}$";

/// Classify each non-blank line of `body`.
pub fn classify(body: &str) -> Vec<Block> {
    classify_with_options(body, &FormatOptions::default())
}

pub fn classify_with_options(body: &str, options: &FormatOptions) -> Vec<Block> {
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| classify_line(line, options))
        .collect()
}

/// Classify a single line.
pub fn classify_line(line: &str, options: &FormatOptions) -> Block {
    if let Some(content) = display_math_content(line) {
        trace!(text = line, "display math");
        return Block::math(options.render_math(content.trim()));
    }

    if let Some(content) = boxed_content(line) {
        match content {
            Some(content) => {
                trace!(text = line, "boxed answer");
                return Block::boxed(options.render_math(content));
            }
            None if !options.unclosed_boxed_as_paragraph => {
                trace!(text = line, "boxed answer without closing");
                return Block::boxed(String::new());
            }
            None => {}
        }
    }

    Block::paragraph(tokenize_with_options(line, options))
}

/// The line with every `\[` and `\]` removed, if it has both.
fn display_math_content(line: &str) -> Option<String> {
    if !line.contains(DISPLAY_OPEN) || !line.contains(DISPLAY_CLOSE) {
        return None;
    }
    Some(line.replace(DISPLAY_OPEN, "").replace(DISPLAY_CLOSE, ""))
}

/// `Some(Some(content))` for `$\boxed{content}$`, `Some(None)` when the
/// opening is present but `}$` never follows it, `None` otherwise.
fn boxed_content(line: &str) -> Option<Option<&str>> {
    let start = line.find(BOXED_OPEN)? + BOXED_OPEN.len();
    let rest = &line[start..];
    Some(rest.find(BOXED_CLOSE).map(|end| &rest[..end]))
}
