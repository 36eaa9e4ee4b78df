//! Content rendering: maps a post's blocks to display-ready render units.

use crate::catalog::ContentBlock;
use crate::highlight::{self, Line};
use serde::Serialize;

/// Semantic heading rank, always within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Levels outside `1..=6` are clamped to the nearest valid rank.
    pub fn clamped(level: u8) -> Self {
        Self(level.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// How a code block should be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    /// Tokenized lines from a known grammar
    Tokens(Vec<Line>),
    /// Unknown grammar: show the text verbatim in monospace
    Plain,
}

/// The renderer's output for one content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderUnit {
    Text {
        text: String,
    },
    Heading {
        text: String,
        level: HeadingLevel,
    },
    Code {
        language: String,
        /// Always the verbatim source, whether or not it was highlighted
        text: String,
        highlight: Highlight,
    },
}

/// Render blocks one-to-one, preserving order.
pub fn render(blocks: &[ContentBlock]) -> Vec<RenderUnit> {
    blocks.iter().map(render_block).collect()
}

pub fn render_block(block: &ContentBlock) -> RenderUnit {
    match block {
        ContentBlock::Paragraph { text } => RenderUnit::Text { text: text.clone() },
        ContentBlock::Heading { text, level } => RenderUnit::Heading {
            text: text.clone(),
            level: HeadingLevel::clamped(*level),
        },
        ContentBlock::Code { text, language } => {
            let highlight = match highlight::highlight(language, text) {
                Some(lines) => Highlight::Tokens(lines),
                None => {
                    log::debug!("no grammar for {language:?}, rendering code as plain text");
                    Highlight::Plain
                }
            };
            RenderUnit::Code {
                language: language.clone(),
                text: text.clone(),
                highlight,
            }
        }
    }
}
