mod app;
mod print;
mod text;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::LevelFilter;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use secfolio_config::Config;
use secfolio_engine::{FilterState, PageMeta, Route, SiteInfo, data};
use std::{
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

use app::{App, Mode};
use print::PrintRequest;
use text::Palette;

#[derive(Parser)]
#[command(name = "secfolio-cli", version, about = "Read the security blog in a terminal")]
struct Args {
    /// Initial search text
    #[arg(short, long, default_value = "")]
    query: String,

    /// Initial tag filter (exact, case-sensitive)
    #[arg(short, long)]
    tag: Option<String>,

    /// Open the post with this slug
    #[arg(short, long)]
    post: Option<String>,

    /// Write plain text to stdout instead of starting the reader
    #[arg(long)]
    print: bool,

    /// List every tag, one per line (implies --print)
    #[arg(long)]
    tags: bool,

    /// Config file to use instead of ~/.config/secfolio/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .init();

    let args = Args::parse();

    let mut config = match Config::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!(
                "Fix or remove the file, or pass --config with another path (default: {})",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    let catalog = data::bundled();
    let mut filter = FilterState::new();
    filter.set_query(args.query.clone());
    if let Some(tag) = &args.tag {
        filter.toggle_tag(tag);
    }

    if args.print || args.tags {
        let request = PrintRequest {
            filter: &filter,
            post: args.post.as_deref(),
            tags_only: args.tags,
            page_size: config.page_size,
        };
        return print::print(&catalog, &request, &mut stdout().lock());
    }

    let route = args.post.map(Route::Post).unwrap_or(Route::Blog);
    let site = SiteInfo::new(config.author.clone(), config.role.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog, site, config.dark_mode, filter, route);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    let config_path = args.config.unwrap_or_else(Config::config_path);
    if let Err(e) = persist_theme(&mut config, &config_path, app.dark_mode) {
        log::warn!("Could not save theme to {}: {e}", config_path.display());
    }

    Ok(())
}

/// Write the reader's theme back to the config file if it was toggled.
fn persist_theme(config: &mut Config, config_path: &Path, dark_mode: bool) -> Result<()> {
    if config.dark_mode == dark_mode {
        return Ok(());
    }
    config.dark_mode = dark_mode;
    config.save_to_path(config_path)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let palette = Palette::new(app.dark_mode);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_search(f, app, &palette, chunks[0]);
    render_tags(f, app, &palette, chunks[1]);

    match app.route.clone() {
        Route::Home => render_home(f, app, &palette, chunks[2]),
        Route::Blog => render_list(f, app, &palette, chunks[2]),
        Route::Post(_) => render_post(f, app, &palette, chunks[2]),
    }

    let help = match (&app.mode, &app.route) {
        (Mode::Search, _) => "Type to search | Enter/Esc: Done",
        (_, Route::Home) => "q: Quit | Enter/b: Blog | d: Theme",
        (_, Route::Blog) => {
            "q: Quit | /: Search | ↑/k ↓/j: Move | Enter: Open | t/T: Tag cursor | Space: Toggle tag | c: Clear | h: Home | d: Theme"
        }
        (_, Route::Post(_)) => "q: Quit | ↑/k ↓/j PgUp/PgDn: Scroll | Esc/b: Back | d: Theme",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            help,
            Style::default().fg(palette.muted),
        ))),
        chunks[3],
    );
}

fn render_search(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let editing = app.mode == Mode::Search;
    let border = if editing { palette.accent } else { palette.muted };
    let mut spans = vec![Span::raw(app.filter.query.clone())];
    if editing {
        spans.push(Span::styled("█", Style::default().fg(palette.accent)));
    } else if app.filter.query.is_empty() {
        spans.push(Span::styled(
            "Search posts... (press /)",
            Style::default().fg(palette.muted),
        ));
    }

    let search = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title("Search"),
    );
    f.render_widget(search, area);
}

fn render_tags(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let spans: Vec<Span> = app
        .tags
        .iter()
        .enumerate()
        .flat_map(|(i, tag)| {
            let mut style = Style::default().fg(palette.text);
            if app.filter.is_selected(tag) {
                style = style.fg(Color::Black).bg(palette.highlight_bg);
            }
            if i == app.tag_cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            [Span::styled(format!(" {tag} "), style), Span::raw(" ")]
        })
        .collect();

    let tags = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Tags"));
    f.render_widget(tags, area);
}

fn render_home(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let title = PageMeta::for_home(&app.site).title;
    let home = Paragraph::new(text::home_lines(&app.site, app.catalog.len(), palette))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: true });
    f.render_widget(home, area);
}

fn render_list(f: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let title = PageMeta::for_blog(&app.site).title;
    let visible = app.visible();

    if visible.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No posts match your search. Press c to clear filters.",
            Style::default().fg(palette.muted),
        )))
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|post| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    post.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{} · {}", post.date, post.tags.join(", ")),
                    Style::default().fg(palette.muted),
                )),
                Line::from(post.excerpt.clone()),
                Line::default(),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(palette.highlight_bg).fg(Color::Black));

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_post(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let Some(post) = app.current_post() else {
        return;
    };

    let title = PageMeta::for_post(post, &app.site).title;
    let content = Paragraph::new(text::post_lines(post, palette))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, area);
}
