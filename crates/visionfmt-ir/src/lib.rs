//! Renderable document tree produced from a model response.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Visit every block in reading order, descending into header bodies.
    pub fn walk(&self, visit: &mut impl FnMut(&Block)) {
        fn walk_blocks(blocks: &[Block], visit: &mut impl FnMut(&Block)) {
            for block in blocks {
                visit(block);
                if let Block::Header { body, .. } = block {
                    walk_blocks(body, visit);
                }
            }
        }
        walk_blocks(&self.blocks, visit);
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A `#`, `##` or `###` section. `body` never holds another `Header`.
    Header {
        level: u8,
        title: String,
        body: Vec<Block>,
    },
    MathBlock { rendered: String },
    BoxedAnswer { rendered: String },
    Paragraph { spans: Vec<InlineSpan> },
}

impl Block {
    pub fn paragraph(spans: Vec<InlineSpan>) -> Self {
        Block::Paragraph { spans }
    }

    pub fn math(rendered: impl Into<String>) -> Self {
        Block::MathBlock {
            rendered: rendered.into(),
        }
    }

    pub fn boxed(rendered: impl Into<String>) -> Self {
        Block::BoxedAnswer {
            rendered: rendered.into(),
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Block::Header { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InlineSpan {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    InlineMath(String),
}

impl InlineSpan {
    pub fn text(s: impl Into<String>) -> Self {
        InlineSpan::Text(s.into())
    }

    /// The string carried by the span, whatever its kind.
    pub fn content(&self) -> &str {
        match self {
            InlineSpan::Text(s)
            | InlineSpan::Bold(s)
            | InlineSpan::Italic(s)
            | InlineSpan::Code(s)
            | InlineSpan::InlineMath(s) => s,
        }
    }
}
