use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use secfolio_engine::{Catalog, FilterState, Post, Route, SiteInfo, all_tags, router};

/// Whether keystrokes edit the search query or drive navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Search,
}

/// Reader state. Filtering and routing go through the engine on every change;
/// this struct only holds the inputs.
pub struct App {
    pub catalog: Catalog,
    pub tags: Vec<String>,
    pub filter: FilterState,
    pub route: Route,
    pub mode: Mode,
    pub list_state: ListState,
    pub tag_cursor: usize,
    pub scroll: u16,
    pub site: SiteInfo,
    pub dark_mode: bool,
}

impl App {
    pub fn new(
        catalog: Catalog,
        site: SiteInfo,
        dark_mode: bool,
        filter: FilterState,
        route: Route,
    ) -> Self {
        let tags = all_tags(&catalog);
        let tag_cursor = filter
            .selected_tag
            .as_ref()
            .and_then(|selected| tags.iter().position(|t| t == selected))
            .unwrap_or(0);

        let mut app = Self {
            catalog,
            tags,
            filter,
            route: Route::Blog,
            mode: Mode::Browse,
            list_state: ListState::default(),
            tag_cursor,
            scroll: 0,
            site,
            dark_mode,
        };
        app.navigate(route);
        app.clamp_selection();
        app
    }

    /// Posts currently visible in the list, in catalog order
    pub fn visible(&self) -> Vec<&Post> {
        self.filter.apply(&self.catalog)
    }

    /// The post being read, if the route points at one
    pub fn current_post(&self) -> Option<&Post> {
        match &self.route {
            Route::Post(slug) => self.catalog.find_by_slug(slug),
            _ => None,
        }
    }

    /// Switch routes. Unknown post slugs land on the blog list.
    pub fn navigate(&mut self, route: Route) {
        self.route = router::navigate(&self.catalog, route);
        self.scroll = 0;
    }

    /// Handle a key press. Returns `false` when the reader should quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.mode == Mode::Search {
            self.handle_search_key(code);
            return true;
        }

        match code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('d') => {
                self.dark_mode = !self.dark_mode;
                return true;
            }
            _ => {}
        }

        match self.route.clone() {
            Route::Home => self.handle_home_key(code),
            Route::Blog => self.handle_list_key(code),
            Route::Post(_) => self.handle_post_key(code),
        }
        true
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                self.filter.query.push(c);
                self.clamp_selection();
            }
            KeyCode::Backspace => {
                self.filter.query.pop();
                self.clamp_selection();
            }
            KeyCode::Enter | KeyCode::Esc => self.mode = Mode::Browse,
            _ => {}
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Enter | KeyCode::Char('b')) {
            self.navigate(Route::Blog);
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Down | KeyCode::Char('j') => self.next_post(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_post(),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('t') | KeyCode::Tab => self.next_tag(),
            KeyCode::Char('T') | KeyCode::BackTab => self.previous_tag(),
            KeyCode::Char(' ') => self.toggle_tag_at_cursor(),
            KeyCode::Char('c') => {
                self.filter.clear();
                self.clamp_selection();
            }
            KeyCode::Char('h') => self.navigate(Route::Home),
            _ => {}
        }
    }

    fn handle_post_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                self.navigate(Route::Blog);
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            _ => {}
        }
    }

    fn next_post(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_post(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn open_selected(&mut self) {
        let slug = self
            .list_state
            .selected()
            .and_then(|i| self.visible().get(i).map(|post| post.slug.clone()));
        if let Some(slug) = slug {
            self.navigate(Route::Post(slug));
        }
    }

    fn next_tag(&mut self) {
        if !self.tags.is_empty() {
            self.tag_cursor = (self.tag_cursor + 1) % self.tags.len();
        }
    }

    fn previous_tag(&mut self) {
        if !self.tags.is_empty() {
            self.tag_cursor = self
                .tag_cursor
                .checked_sub(1)
                .unwrap_or(self.tags.len() - 1);
        }
    }

    fn toggle_tag_at_cursor(&mut self) {
        if let Some(tag) = self.tags.get(self.tag_cursor) {
            self.filter.toggle_tag(tag);
            self.clamp_selection();
        }
    }

    /// Keep the list selection inside the (possibly shrunken) visible list
    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use secfolio_engine::data;

    fn app() -> App {
        App::new(
            data::bundled(),
            SiteInfo::default(),
            true,
            FilterState::new(),
            Route::Blog,
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_starts_on_list_with_first_post_selected() {
        let app = app();
        assert_eq!(app.route, Route::Blog);
        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.visible().len(), 6);
    }

    #[test]
    fn test_search_mode_edits_query() {
        let mut app = app();
        app.handle_key(KeyCode::Char('/'));
        assert_eq!(app.mode, Mode::Search);

        type_text(&mut app, "kubernetesx");
        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.filter.query, "kubernetes");
        assert_eq!(app.visible().len(), 1);

        // 'q' is just text while searching
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn test_selection_cleared_when_nothing_matches() {
        let mut app = app();
        app.handle_key(KeyCode::Char('/'));
        type_text(&mut app, "no such post");
        assert_eq!(app.list_state.selected(), None);

        // Opening with nothing selected stays on the list
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.route, Route::Blog);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        assert_eq!(app.list_state.selected(), Some(5));
        app.handle_key(KeyCode::Down);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_open_and_close_post() {
        let mut app = app();
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.route,
            Route::Post("kubernetes-security-hardening".to_string())
        );
        assert_eq!(
            app.current_post().map(|p| p.slug.as_str()),
            Some("kubernetes-security-hardening")
        );

        app.handle_key(KeyCode::Char('j'));
        assert_eq!(app.scroll, 1);

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.route, Route::Blog);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_space_toggles_tag_under_cursor() {
        let mut app = app();
        // Tags are sorted: "API Security" first, then "AWS"
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.tags[app.tag_cursor], "AWS");

        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.filter.selected_tag.as_deref(), Some("AWS"));
        assert_eq!(app.visible().len(), 1);

        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.filter.selected_tag, None);
        assert_eq!(app.visible().len(), 6);
    }

    #[test]
    fn test_previous_tag_wraps() {
        let mut app = app();
        app.handle_key(KeyCode::Char('T'));
        assert_eq!(app.tags[app.tag_cursor], "Zero-Day");
    }

    #[test]
    fn test_clear_resets_filters() {
        let mut app = app();
        app.handle_key(KeyCode::Char(' '));
        app.handle_key(KeyCode::Char('/'));
        type_text(&mut app, "zzz");
        app.handle_key(KeyCode::Enter);
        assert!(app.visible().is_empty());

        app.handle_key(KeyCode::Char('c'));
        assert!(app.filter.is_empty());
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_unknown_initial_post_falls_back_to_list() {
        let app = App::new(
            data::bundled(),
            SiteInfo::default(),
            false,
            FilterState::new(),
            Route::Post("does-not-exist".to_string()),
        );
        assert_eq!(app.route, Route::Blog);
    }

    #[test]
    fn test_initial_tag_moves_cursor() {
        let mut filter = FilterState::new();
        filter.toggle_tag("Web3");
        let app = App::new(data::bundled(), SiteInfo::default(), true, filter, Route::Blog);
        assert_eq!(app.tags[app.tag_cursor], "Web3");
        assert_eq!(app.visible().len(), 1);
    }

    #[test]
    fn test_home_and_back() {
        let mut app = app();
        app.handle_key(KeyCode::Char('h'));
        assert_eq!(app.route, Route::Home);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.route, Route::Blog);
    }

    #[test]
    fn test_theme_toggle_outside_search() {
        let mut app = app();
        app.handle_key(KeyCode::Char('d'));
        assert!(!app.dark_mode);

        app.handle_key(KeyCode::Char('/'));
        app.handle_key(KeyCode::Char('d'));
        assert!(!app.dark_mode);
        assert_eq!(app.filter.query, "d");

        app.handle_key(KeyCode::Esc);
        app.handle_key(KeyCode::Char('d'));
        assert!(app.dark_mode);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.handle_key(KeyCode::Char('q')));
    }
}
