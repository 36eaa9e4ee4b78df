use dioxus::prelude::*;
use secfolio_engine::{Highlight, Line};

/// A code block with numbered lines. Unknown languages fall back to
/// verbatim monospace text under `language-text`.
#[component]
pub fn CodeBlock(language: String, text: String, highlight: Highlight) -> Element {
    let label = if language.is_empty() {
        "text".to_string()
    } else {
        language.clone()
    };

    let body = match highlight {
        Highlight::Tokens(lines) => rsx! {
            code {
                class: "language-{language}",
                for (i, line) in lines.into_iter().enumerate() {
                    CodeLine { key: "{i}", line }
                }
            }
        },
        Highlight::Plain => rsx! {
            code {
                class: "language-text",
                for (i, raw) in text.split('\n').enumerate() {
                    span { key: "{i}", class: "code-line", "{raw}" }
                }
            }
        },
    };

    rsx! {
        div {
            class: "code-block",
            div { class: "code-label", "{label}" }
            pre { {body} }
        }
    }
}

#[component]
fn CodeLine(line: Line) -> Element {
    rsx! {
        span {
            class: "code-line",
            for (i, token) in line.tokens.into_iter().enumerate() {
                span { key: "{i}", class: token.kind.css_class(), "{token.text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use secfolio_engine::render::render_block;
    use secfolio_engine::{ContentBlock, RenderUnit};

    fn render_code(language: &str, text: &str) -> String {
        let RenderUnit::Code {
            language,
            text,
            highlight,
        } = render_block(&ContentBlock::code(language, text))
        else {
            panic!("code block rendered as something else");
        };

        let mut dom = VirtualDom::new_with_props(
            CodeBlock,
            CodeBlockProps {
                language,
                text,
                highlight,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_highlighted_block_has_token_spans() {
        let html = render_code("python", "def scan(host):\n    return 42");

        assert!(html.contains("<pre>"), "{html}");
        assert!(html.contains("language-python"));
        assert!(html.contains("tok-keyword"));
        assert!(html.contains("tok-number"));
        assert_eq!(html.matches("class=\"code-line\"").count(), 2);
    }

    #[test]
    fn test_unknown_language_is_plain_text() {
        let html = render_code("brainfuck", "++++[>++<-]");

        assert!(html.contains("language-text"), "{html}");
        assert!(!html.contains("tok-"));
        assert!(html.contains("++++[&gt;++&lt;-]"));
        assert!(html.contains("brainfuck"));
    }

    #[test]
    fn test_empty_language_is_labelled_text() {
        let html = render_code("", "plain");
        assert!(html.contains("language-text"));
        assert!(html.contains(">text<"));
    }
}
