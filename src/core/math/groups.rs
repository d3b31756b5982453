//! Balanced group scanning for macro arguments.
//!
//! All delimiters handled here are ASCII, so byte offsets returned by these
//! helpers are always valid `str` boundaries.

use std::ops::Range;

/// Match a `{...}` group starting exactly at `at`.
///
/// Returns the byte range of the group's contents and the offset just past the
/// closing brace. `None` if `at` is not an opening brace or the group never
/// closes.
pub fn brace_group(text: &str, at: usize) -> Option<(Range<usize>, usize)> {
    delimited_group(text, at, b'{', b'}')
}

/// Match a `[...]` group starting exactly at `at`.
pub fn bracket_group(text: &str, at: usize) -> Option<(Range<usize>, usize)> {
    delimited_group(text, at, b'[', b']')
}

fn delimited_group(text: &str, at: usize, open: u8, close: u8) -> Option<(Range<usize>, usize)> {
    let bytes = text.as_bytes();
    if bytes.get(at) != Some(&open) {
        return None;
    }

    let mut depth = 0usize;
    let mut i = at;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            // `\{` and `\}` are literal braces, `\\` a literal backslash
            let next = bytes.get(i + 1).copied();
            if next == Some(b'\\') || next == Some(open) || next == Some(close) {
                i += 2;
                continue;
            }
        }
        match bytes[i] {
            b if b == open => depth += 1,
            b if b == close => {
                depth -= 1;
                if depth == 0 {
                    return Some((at + 1..i, i + 1));
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Whether the backslash at `at` is the second half of a `\\` pair, i.e. it is
/// preceded by an odd run of backslashes.
pub fn is_escaped(text: &str, at: usize) -> bool {
    let run = text.as_bytes()[..at]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    run % 2 == 1
}

/// End offset of the run of ASCII letters starting at `from`.
pub fn letters_end(text: &str, from: usize) -> usize {
    let bytes = text.as_bytes();
    let mut end = from;
    while end < bytes.len() && bytes[end].is_ascii_alphabetic() {
        end += 1;
    }
    end
}
