//! Turning render units into terminal text: styled ratatui lines for the
//! interactive reader, plain strings for `--print`.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use secfolio_engine::{
    Highlight, Post, RenderUnit, Severity, SiteInfo, TokenKind, data, highlight, render,
};

/// Colours for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub muted: Color,
    pub text: Color,
    pub highlight_bg: Color,
}

impl Palette {
    pub fn new(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                accent: Color::Cyan,
                muted: Color::DarkGray,
                text: Color::Gray,
                highlight_bg: Color::Cyan,
            }
        } else {
            Self {
                accent: Color::Blue,
                muted: Color::Gray,
                text: Color::Black,
                highlight_bg: Color::LightBlue,
            }
        }
    }

    pub fn token(&self, kind: TokenKind) -> Style {
        let color = match kind {
            TokenKind::Plain => self.text,
            TokenKind::Keyword => Color::Magenta,
            TokenKind::String => Color::Green,
            TokenKind::Number | TokenKind::Literal => Color::Yellow,
            TokenKind::Comment => self.muted,
            TokenKind::Punctuation => self.text,
            TokenKind::Property => self.accent,
        };
        let style = Style::default().fg(color);
        if kind == TokenKind::Comment {
            style.add_modifier(Modifier::ITALIC)
        } else {
            style
        }
    }
}

fn section_title(title: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

/// Landing page: who, headline stats, certifications and disclosed advisories
pub fn home_lines(site: &SiteInfo, post_count: usize, palette: &Palette) -> Vec<Line<'static>> {
    let muted = Style::default().fg(palette.muted);
    let mut lines = vec![
        Line::from(Span::styled(
            site.author.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(site.role.clone()),
        Line::default(),
    ];

    lines.push(Line::from(
        data::stats()
            .iter()
            .flat_map(|stat| {
                [
                    Span::styled(
                        stat.value.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" {}   ", stat.label), muted),
                ]
            })
            .collect::<Vec<_>>(),
    ));
    lines.push(Line::default());

    lines.push(section_title("Professional Certifications", palette));
    for cert in data::certifications() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<6}", cert.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(cert.full_name),
            Span::styled(format!(" · Obtained {}", cert.date), muted),
        ]));
    }
    lines.push(Line::default());

    lines.push(section_title("Recent Security Advisories", palette));
    for advisory in data::advisories() {
        let severity = match advisory.severity {
            Severity::Critical => Color::Red,
            Severity::High => Color::LightRed,
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}]", advisory.severity),
                Style::default().fg(severity).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {} ", advisory.platform)),
            Span::styled(advisory.bounty, Style::default().fg(palette.accent)),
            Span::styled(format!(" · {} · {}", advisory.date, advisory.status), muted),
        ]));
        lines.push(Line::from(format!("  {}", advisory.description)));
        lines.push(Line::from(Span::styled(
            format!("  Potential Impact: {}", advisory.impact),
            Style::default().fg(severity),
        )));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        format!("Press Enter to read the blog ({post_count} posts)."),
        muted,
    )));
    lines
}

fn line_number(n: usize, palette: &Palette) -> Span<'static> {
    Span::styled(format!("{n:>3} │ "), Style::default().fg(palette.muted))
}

/// Styled lines for the post detail pane
pub fn post_lines(post: &Post, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · {}", post.date, post.tags.join(", ")),
            Style::default().fg(palette.muted),
        )),
        Line::default(),
        Line::from(Span::styled(
            post.excerpt.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
    ];

    for unit in render(&post.content) {
        lines.extend(unit_lines(&unit, palette));
        lines.push(Line::default());
    }

    lines
}

fn unit_lines(unit: &RenderUnit, palette: &Palette) -> Vec<Line<'static>> {
    match unit {
        RenderUnit::Text { text } => vec![Line::raw(text.clone())],
        RenderUnit::Heading { text, level } => {
            let prefix = "#".repeat(level.get() as usize);
            vec![Line::from(Span::styled(
                format!("{prefix} {text}"),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ))]
        }
        RenderUnit::Code {
            language,
            text,
            highlight,
        } => {
            let label = if language.is_empty() { "text" } else { language };
            let mut lines = vec![Line::from(Span::styled(
                format!("── {label} "),
                Style::default().fg(palette.muted),
            ))];
            match highlight {
                Highlight::Tokens(code_lines) => {
                    lines.extend(code_lines.iter().enumerate().map(|(i, code_line)| {
                        styled_code_line(i + 1, code_line, palette)
                    }));
                }
                Highlight::Plain => {
                    lines.extend(text.split('\n').enumerate().map(|(i, raw)| {
                        Line::from(vec![line_number(i + 1, palette), Span::raw(raw.to_string())])
                    }));
                }
            }
            lines
        }
    }
}

fn styled_code_line(n: usize, code_line: &highlight::Line, palette: &Palette) -> Line<'static> {
    let mut spans = vec![line_number(n, palette)];
    spans.extend(
        code_line
            .tokens
            .iter()
            .map(|token| Span::styled(token.text.clone(), palette.token(token.kind))),
    );
    Line::from(spans)
}

/// Plain-text rendering of a whole post
pub fn plain_post(post: &Post) -> String {
    let mut out = String::new();
    out.push_str(&post.title);
    out.push('\n');
    out.push_str(&format!("{} · {}\n\n", post.date, post.tags.join(", ")));
    out.push_str(&post.excerpt);
    out.push_str("\n\n");

    for unit in render(&post.content) {
        match unit {
            RenderUnit::Text { text } => out.push_str(&text),
            RenderUnit::Heading { text, level } => {
                out.push_str(&"#".repeat(level.get() as usize));
                out.push(' ');
                out.push_str(&text);
            }
            RenderUnit::Code { language, text, .. } => {
                out.push_str(&format!("```{language}\n{text}"));
                if !text.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```");
            }
        }
        out.push_str("\n\n");
    }

    out
}

/// Plain-text blog list, optionally capped at `limit` entries
pub fn plain_list(posts: &[&Post], limit: Option<usize>) -> String {
    if posts.is_empty() {
        return "No posts match.\n".to_string();
    }

    let shown = limit.unwrap_or(posts.len()).min(posts.len());
    let mut out = String::new();
    for post in &posts[..shown] {
        out.push_str(&format!(
            "{}\n  {} · {}\n  {}\n  /blog/{}\n\n",
            post.title,
            post.date,
            post.tags.join(", "),
            post.excerpt,
            post.slug
        ));
    }
    if shown < posts.len() {
        out.push_str(&format!("… and {} more\n", posts.len() - shown));
    }
    out
}
