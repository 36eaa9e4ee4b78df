//! Syntax highlighting for code blocks.
//!
//! A [`Grammar`] is an ordered list of anchored regex rules. Tokenizing walks
//! each line left to right; at every position the first rule that matches
//! wins, and a character no rule claims becomes plain text. Every byte of the
//! input ends up in exactly one token, so highlighting is lossless.
//!
//! Constructs spanning several lines (block comments, template strings) are
//! only recognised when they open and close on the same line.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Plain,
    Keyword,
    String,
    Number,
    Comment,
    Punctuation,
    /// Object keys, YAML/JSON keys, shell variables
    Property,
    /// `true`, `false`, `null` and friends
    Literal,
}

impl TokenKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Plain => "tok-plain",
            Self::Keyword => "tok-keyword",
            Self::String => "tok-string",
            Self::Number => "tok-number",
            Self::Comment => "tok-comment",
            Self::Punctuation => "tok-punctuation",
            Self::Property => "tok-property",
            Self::Literal => "tok-literal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// One source line of highlighted code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Line {
    pub tokens: Vec<Token>,
}

impl Line {
    /// The original source text of the line
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    fn push(&mut self, kind: TokenKind, text: &str) {
        // Merge runs of the same kind (mostly single plain characters)
        if let Some(last) = self.tokens.last_mut()
            && last.kind == kind
        {
            last.text.push_str(text);
            return;
        }
        self.tokens.push(Token {
            kind,
            text: text.to_string(),
        });
    }
}

struct Rule {
    kind: TokenKind,
    regex: Regex,
}

pub struct Grammar {
    name: &'static str,
    aliases: &'static [&'static str],
    rules: Vec<Rule>,
}

impl Grammar {
    fn new(
        name: &'static str,
        aliases: &'static [&'static str],
        rules: &[(TokenKind, &str)],
    ) -> Self {
        let rules = rules
            .iter()
            .filter_map(|(kind, pattern)| match Regex::new(&format!("^(?:{pattern})")) {
                Ok(regex) => Some(Rule { kind: *kind, regex }),
                Err(e) => {
                    log::error!("invalid {name} highlighting rule {pattern:?}: {e}");
                    None
                }
            })
            .collect();

        Self {
            name,
            aliases,
            rules,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn matches_name(&self, language: &str) -> bool {
        self.name == language || self.aliases.contains(&language)
    }

    #[cfg(test)]
    fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Tokenize `code`, one [`Line`] per `\n`-separated line.
    pub fn tokenize(&self, code: &str) -> Vec<Line> {
        code.split('\n').map(|line| self.tokenize_line(line)).collect()
    }

    fn tokenize_line(&self, source: &str) -> Line {
        let mut line = Line::default();
        let mut pos = 0;

        while pos < source.len() {
            let rest = &source[pos..];
            let hit = self.rules.iter().find_map(|rule| {
                rule.regex
                    .find(rest)
                    .filter(|m| !m.is_empty())
                    .map(|m| (rule.kind, m.end()))
            });

            let (kind, len) = hit.unwrap_or_else(|| {
                let width = rest.chars().next().map_or(1, char::len_utf8);
                (TokenKind::Plain, width)
            });

            line.push(kind, &rest[..len]);
            pos += len;
        }

        line
    }
}

const DOUBLE_QUOTED: &str = r#""(?:[^"\\]|\\.)*""#;
const SINGLE_QUOTED: &str = r"'(?:[^'\\]|\\.)*'";
const NUMBER: &str = r"\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b";
const C_COMMENT: &str = r"//.*|/\*.*?\*/";
const HASH_COMMENT: &str = r"#.*";

static GRAMMARS: LazyLock<Vec<Grammar>> = LazyLock::new(|| {
    use TokenKind::*;

    let js_keywords = r"(?:async|await|break|case|catch|class|const|continue|default|delete|do|else|export|extends|finally|for|from|function|if|import|in|instanceof|interface|let|new|of|return|static|switch|this|throw|try|type|typeof|var|void|while|yield)\b";

    vec![
        Grammar::new(
            "javascript",
            &["js", "jsx", "typescript", "ts", "tsx"],
            &[
                (Comment, C_COMMENT),
                (String, DOUBLE_QUOTED),
                (String, SINGLE_QUOTED),
                (String, r"`(?:[^`\\]|\\.)*`"),
                (Keyword, js_keywords),
                (Literal, r"(?:true|false|null|undefined|NaN)\b"),
                (Number, NUMBER),
                (Plain, r"[A-Za-z_$][\w$]*"),
                (Punctuation, r"[{}()\[\];,.:=<>+\-*/!&|?%^~]+"),
            ],
        ),
        Grammar::new(
            "python",
            &["py", "python3"],
            &[
                (Comment, HASH_COMMENT),
                (String, r#"[fFrRbB]?"(?:[^"\\]|\\.)*""#),
                (String, r"[fFrRbB]?'(?:[^'\\]|\\.)*'"),
                (Keyword, r"(?:and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b"),
                (Literal, r"(?:True|False|None)\b"),
                (Number, NUMBER),
                (Plain, r"[A-Za-z_]\w*"),
                (Punctuation, r"[{}()\[\];,.:=<>+\-*/!&|%^~@]+"),
            ],
        ),
        Grammar::new(
            "yaml",
            &["yml"],
            &[
                (Comment, HASH_COMMENT),
                (Property, r"[A-Za-z_][\w.\-]*\s*:"),
                (String, DOUBLE_QUOTED),
                (String, SINGLE_QUOTED),
                (Literal, r"(?:true|false|null|~)\b"),
                (Number, NUMBER),
                (Plain, r"[A-Za-z_][\w.\-/]*"),
                (Punctuation, r"[{}\[\],\-:|>&*!]+"),
            ],
        ),
        Grammar::new(
            "json",
            &["jsonc"],
            &[
                (Property, r#""(?:[^"\\]|\\.)*"\s*:"#),
                (String, DOUBLE_QUOTED),
                (Literal, r"(?:true|false|null)\b"),
                (Number, r"-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?"),
                (Punctuation, r"[{}\[\],:]+"),
            ],
        ),
        Grammar::new(
            "solidity",
            &["sol"],
            &[
                (Comment, C_COMMENT),
                (String, DOUBLE_QUOTED),
                (String, SINGLE_QUOTED),
                (Keyword, r"(?:address|bool|bytes\d*|constructor|contract|emit|event|external|function|if|else|for|while|internal|interface|library|mapping|memory|modifier|payable|pragma|private|public|pure|require|return|returns|revert|storage|string|struct|uint\d*|int\d*|view)\b"),
                (Literal, r"(?:true|false)\b"),
                (Number, NUMBER),
                (Plain, r"[A-Za-z_$][\w$]*"),
                (Punctuation, r"[{}()\[\];,.:=<>+\-*/!&|?%^~]+"),
            ],
        ),
        Grammar::new(
            "graphql",
            &["gql"],
            &[
                (Comment, HASH_COMMENT),
                (String, DOUBLE_QUOTED),
                (Keyword, r"(?:query|mutation|subscription|fragment|on|type|schema|input|enum|interface|union|scalar|extend|directive|implements)\b"),
                (Literal, r"(?:true|false|null)\b"),
                (Property, r"\$[A-Za-z_]\w*"),
                (Number, NUMBER),
                (Plain, r"[A-Za-z_]\w*"),
                (Punctuation, r"[{}()\[\]:!=@,.|&]+"),
            ],
        ),
        Grammar::new(
            "hcl",
            &["terraform", "tf"],
            &[
                (Comment, HASH_COMMENT),
                (Comment, C_COMMENT),
                (String, DOUBLE_QUOTED),
                (Keyword, r"(?:resource|data|variable|output|provider|module|locals|terraform|for_each|count|dynamic)\b"),
                (Literal, r"(?:true|false|null)\b"),
                (Number, NUMBER),
                (Plain, r"[A-Za-z_][\w\-]*"),
                (Punctuation, r"[{}()\[\],.:=<>+\-*/!&|?%]+"),
            ],
        ),
        Grammar::new(
            "bash",
            &["sh", "shell", "zsh"],
            &[
                (Comment, HASH_COMMENT),
                (String, DOUBLE_QUOTED),
                (String, SINGLE_QUOTED),
                (Keyword, r"(?:if|then|else|elif|fi|for|while|until|do|done|case|esac|in|function|return|export|local|readonly)\b"),
                (Property, r"\$\{[^}]*\}|\$\w+"),
                (Number, r"\d+\b"),
                (Plain, r"[A-Za-z_][\w\-]*"),
                (Punctuation, r"[|&;<>()\[\]{}=!]+"),
            ],
        ),
        Grammar::new(
            "rust",
            &["rs"],
            &[
                (Comment, C_COMMENT),
                (String, DOUBLE_QUOTED),
                (String, r"'(?:[^'\\]|\\.)'"),
                (Keyword, r"(?:as|async|await|break|const|continue|crate|dyn|else|enum|extern|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|Self|static|struct|super|trait|type|unsafe|use|where|while)\b"),
                (Literal, r"(?:true|false|None|Some|Ok|Err)\b"),
                (Number, NUMBER),
                (Plain, r"[A-Za-z_]\w*"),
                (Punctuation, r"[{}()\[\];,.:=<>+\-*/!&|?%^~#']+"),
            ],
        ),
    ]
});

/// Find the grammar for a language name or alias (trimmed, ASCII case-insensitive).
pub fn lookup(language: &str) -> Option<&'static Grammar> {
    let language = language.trim().to_ascii_lowercase();
    if language.is_empty() {
        return None;
    }
    GRAMMARS.iter().find(|g| g.matches_name(&language))
}

/// Highlight `code` as `language`, or `None` when no grammar is known for it.
pub fn highlight(language: &str, code: &str) -> Option<Vec<Line>> {
    lookup(language).map(|grammar| grammar.tokenize(code))
}

/// Names of all built-in grammars
pub fn grammar_names() -> impl Iterator<Item = &'static str> {
    GRAMMARS.iter().map(Grammar::name)
}
