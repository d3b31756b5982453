//! Response formatting engine
//!
//! - [`segment`]: response text → header sections → [`Document`](visionfmt_ir::Document)
//! - [`classify`]: section body → math / boxed answer / paragraph blocks
//! - [`inline`]: one paragraph line → inline spans
//! - [`math`]: LaTeX macros → Unicode text
//!
//! Every stage is a pure function of its input and never fails.

pub mod classify;
pub mod inline;
pub mod math;
pub mod options;
pub mod segment;

pub use classify::{classify, classify_line, classify_with_options};
pub use inline::{scan, tokenize, tokenize_with_options, InlineKind, InlineMatch};
pub use math::translate;
pub use options::FormatOptions;
pub use segment::{header_level, segment, segment_with_options, split_sections};
