//! Loss reporting for constructs that could not be fully formatted.
//!
//! Formatting degrades instead of failing, so a macro the translator does not
//! know or a boxed answer with no closing leaves a trace in the output. The
//! audit walks a finished document and records each one.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use visionfmt_ir::{Block, Document, InlineSpan};

use crate::core::FormatOptions;

lazy_static! {
    static ref MACRO_NAME: Regex = Regex::new(r"\\([A-Za-z]+)").expect("macro pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LossKind {
    UntranslatedMacro,
    EmptyBoxedAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LossRecord {
    pub kind: LossKind,
    pub name: Option<String>,
    pub snippet: Option<String>,
}

impl LossRecord {
    pub fn new(kind: LossKind, name: Option<String>, snippet: Option<String>) -> Self {
        Self {
            kind,
            name,
            snippet,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LossReport {
    pub losses: Vec<LossRecord>,
}

impl LossReport {
    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    /// Names of untranslated macros, in order of appearance
    pub fn untranslated_macros(&self) -> impl Iterator<Item = &str> {
        self.losses
            .iter()
            .filter(|loss| loss.kind == LossKind::UntranslatedMacro)
            .filter_map(|loss| loss.name.as_deref())
    }
}

/// Record every degraded construct in `document`.
///
/// Untranslated macros are only reported when math translation was enabled;
/// raw math is expected to keep its macros.
pub fn audit(document: &Document, options: &FormatOptions) -> LossReport {
    let mut report = LossReport::default();
    document.walk(&mut |block| match block {
        Block::MathBlock { rendered } => {
            if options.translate_math {
                record_macros(rendered, &mut report);
            }
        }
        Block::BoxedAnswer { rendered } => {
            if rendered.is_empty() {
                report
                    .losses
                    .push(LossRecord::new(LossKind::EmptyBoxedAnswer, None, None));
            } else if options.translate_math {
                record_macros(rendered, &mut report);
            }
        }
        Block::Paragraph { spans } if options.translate_math => {
            for span in spans {
                if let InlineSpan::InlineMath(rendered) = span {
                    record_macros(rendered, &mut report);
                }
            }
        }
        _ => {}
    });
    report
}

fn record_macros(rendered: &str, report: &mut LossReport) {
    for caps in MACRO_NAME.captures_iter(rendered) {
        report.losses.push(LossRecord::new(
            LossKind::UntranslatedMacro,
            Some(caps[1].to_string()),
            Some(rendered.to_string()),
        ));
    }
}
