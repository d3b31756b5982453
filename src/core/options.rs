//! Formatting options

use serde::{Deserialize, Serialize};

use crate::utils::error::Result;

/// Options controlling how a response is formatted.
///
/// The defaults give the standard behaviour; every field is optional when
/// loading from TOML or a JS object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Translate LaTeX macros in math content to Unicode. When disabled,
    /// math blocks, boxed answers and inline math carry their raw LaTeX.
    pub translate_math: bool,
    /// Turn a `$\boxed{` line with no closing `}$` into a paragraph instead
    /// of an empty boxed answer.
    pub unclosed_boxed_as_paragraph: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            translate_math: true,
            unclosed_boxed_as_paragraph: false,
        }
    }
}

impl FormatOptions {
    /// Keep math as raw LaTeX for renderers that typeset it themselves
    pub fn raw_math() -> Self {
        Self {
            translate_math: false,
            ..Self::default()
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Apply math translation if enabled.
    pub(crate) fn render_math(&self, raw: &str) -> String {
        if self.translate_math {
            super::math::translate(raw)
        } else {
            raw.to_string()
        }
    }
}
