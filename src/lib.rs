//! # visionfmt
//!
//! Formatting engine for vision-model answers. The raw answer text, a mix of
//! Markdown-style headers, inline emphasis and LaTeX math, is turned into a
//! [`Document`] tree that a renderer can walk.
//!
//! ```
//! use visionfmt::{format_response, Block};
//!
//! let doc = format_response("## Area\n\\[A = \\pi r^2\\]");
//! assert_eq!(
//!     doc.blocks,
//!     vec![Block::Header {
//!         level: 2,
//!         title: "Area".into(),
//!         body: vec![Block::math("A = π r⁽2⁾")],
//!     }]
//! );
//! ```

pub mod chat;
pub mod core;
pub mod utils;
pub mod wasm;

use serde::Serialize;

pub use visionfmt_ir as ir;
pub use visionfmt_ir::{Block, Document, InlineSpan};

pub use crate::core::{
    classify, classify_with_options, segment, segment_with_options, tokenize,
    tokenize_with_options, FormatOptions,
};
pub use crate::utils::loss::{LossKind, LossRecord, LossReport};
pub use crate::utils::{Result, VfmtError};

/// Translate LaTeX macros in a math fragment to Unicode text.
pub fn translate_math(text: &str) -> String {
    crate::core::translate(text)
}

/// Format a full model answer with default options.
pub fn format_response(text: &str) -> Document {
    segment(text)
}

pub fn format_response_with_options(text: &str, options: &FormatOptions) -> Document {
    segment_with_options(text, options)
}

/// A formatted document together with what could not be formatted cleanly.
#[derive(Debug, Clone, Serialize)]
pub struct FormatReport {
    pub document: Document,
    pub report: LossReport,
}

pub fn format_response_with_report(text: &str, options: &FormatOptions) -> FormatReport {
    let document = segment_with_options(text, options);
    let report = utils::loss::audit(&document, options);
    FormatReport { document, report }
}
