use crate::ui::components::{code_block::CodeBlock, heading::Heading, paragraph::Paragraph};
use dioxus::prelude::*;
use secfolio_engine::RenderUnit;

#[component]
pub fn ContentUnit(unit: RenderUnit) -> Element {
    match unit {
        RenderUnit::Text { text } => rsx! {
            Paragraph { text }
        },
        RenderUnit::Heading { text, level } => rsx! {
            Heading { text, level }
        },
        RenderUnit::Code {
            language,
            text,
            highlight,
        } => rsx! {
            CodeBlock { language, text, highlight }
        },
    }
}
