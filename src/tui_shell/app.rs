use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Locator, NEW_GIST_ID};
use crate::workspace::{Notice, RouteAction, RouteOrigin, Workbench, arbitrate, parse_route, route_for};

use super::input::Input;
use super::modal;
use super::render;

pub fn run(bench: Workbench, initial: Locator) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("the workspace requires an interactive terminal (TTY)");
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(bench, initial);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum InputAction {
    Route,
    Rename,
    SignIn,
}

pub(super) struct App {
    pub(super) bench: Workbench,
    pub(super) route: String,
    pub(super) nav_cursor: usize,
    pub(super) input: Option<(InputAction, Input)>,
    pub(super) notices: Vec<Notice>,
    pub(super) build_count: u64,
    pub(super) quit: bool,
}

impl App {
    pub(super) fn new(bench: Workbench, initial: Locator) -> Self {
        let route = route_for(&initial);
        let mut app = Self {
            bench,
            route,
            nav_cursor: 0,
            input: None,
            notices: Vec::new(),
            build_count: 0,
            quit: false,
        };
        app.bench.startup(&initial);
        app.absorb_effects();
        app
    }

    /// Drains controller effects into shell state: notices, rebuild requests,
    /// and the internal route correction after a load settles elsewhere.
    pub(super) fn absorb_effects(&mut self) {
        self.notices.extend(self.bench.drain_notices());
        if self.bench.take_rebuild_request() {
            self.build_count += 1;
        }
        let requested = parse_route(&self.route);
        if let RouteAction::CorrectRoute(route) =
            arbitrate(&requested, RouteOrigin::Internal, self.bench.locator())
        {
            self.route = route;
        }
    }

    /// External navigation: follow the new route with a load when it differs
    /// from what is already open.
    fn navigate(&mut self, route: String) {
        let requested = parse_route(&route);
        self.route = route;
        if let RouteAction::Load(locator) =
            arbitrate(&requested, RouteOrigin::External, self.bench.locator())
        {
            self.bench.load_algorithm(locator, false);
        }
    }

    fn open_selected(&mut self) {
        if self.nav_cursor == 0 {
            self.navigate(format!("/scratch-paper/{}", NEW_GIST_ID));
            return;
        }
        let papers = &self.bench.session().scratch_papers;
        if let Some(paper) = papers.get(self.nav_cursor - 1) {
            let route = format!("/scratch-paper/{}", paper.key);
            self.navigate(route);
        }
    }

    fn cycle_tab(&mut self, step: isize) {
        let len = self.bench.files().len();
        if len == 0 {
            return;
        }
        let current = self.bench.panes().active_tab.unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len as isize) as usize;
        self.bench.set_active_tab(next);
    }

    fn start_input(&mut self, action: InputAction, prefill: String) {
        self.input = Some((action, Input::with_text(prefill)));
    }

    fn commit_input(&mut self) {
        let Some((action, input)) = self.input.take() else {
            return;
        };
        let value = input.buf.trim().to_string();
        match action {
            InputAction::Route => {
                if !value.is_empty() {
                    self.navigate(value);
                }
            }
            InputAction::Rename => {
                if !value.is_empty()
                    && let Err(err) = self.bench.rename_active_file(&value)
                {
                    self.notices.push(Notice::Error(format!("{:#}", err)));
                }
            }
            InputAction::SignIn => {
                if value.is_empty() {
                    return;
                }
                match self.bench.sign_in(&value) {
                    Ok(()) => {
                        let login = self
                            .bench
                            .session()
                            .user
                            .as_ref()
                            .map(|u| u.login.clone())
                            .unwrap_or_default();
                        self.notices.push(Notice::Info(format!("signed in as {}", login)));
                    }
                    Err(err) => self.notices.push(Notice::Error(format!("{:#}", err))),
                }
            }
        }
    }

    fn request_quit(&mut self) {
        if self.bench.is_saved()
            || modal::confirm("Discard unsaved changes and quit?").unwrap_or(false)
        {
            self.quit = true;
        }
    }

    fn adjust_editor_weight(&mut self, delta: i32) {
        let mut weights = self.bench.panes().weights;
        weights[2] = (weights[2] as i32 + delta).clamp(1, 8) as u16;
        self.bench.set_pane_weights(weights);
    }
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.absorb_effects();
        terminal
            .draw(|f| render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    if app.input.is_some() {
        handle_input_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('n') => app.bench.toggle_navigator(),
        KeyCode::Up => app.nav_cursor = app.nav_cursor.saturating_sub(1),
        KeyCode::Down => {
            let max = app.bench.session().scratch_papers.len();
            app.nav_cursor = (app.nav_cursor + 1).min(max);
        }
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('g') => {
            let route = app.route.clone();
            app.start_input(InputAction::Route, route);
        }
        KeyCode::Tab => app.cycle_tab(1),
        KeyCode::BackTab => app.cycle_tab(-1),
        KeyCode::Char('+') => {
            let add_index = app.bench.files().len();
            app.bench.set_active_tab(add_index);
        }
        KeyCode::Char('r') => {
            let current = app
                .bench
                .active_file()
                .map(|f| f.name.clone())
                .unwrap_or_default();
            app.start_input(InputAction::Rename, current);
        }
        KeyCode::Char('x') => app.bench.delete_active_file(),
        KeyCode::Char('s') => app.start_input(InputAction::SignIn, String::new()),
        KeyCode::Char('o') => {
            app.bench.sign_out();
            app.notices.push(Notice::Info("signed out".to_string()));
        }
        KeyCode::Char('R') => {
            if let Err(err) = app.bench.refresh_scratch_papers() {
                app.notices.push(Notice::Error(format!("{:#}", err)));
            }
        }
        KeyCode::Char('<') => app.adjust_editor_weight(-1),
        KeyCode::Char('>') => app.adjust_editor_weight(1),
        _ => {}
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input = None;
        }
        KeyCode::Enter => app.commit_input(),
        code => {
            if let Some((_, input)) = app.input.as_mut() {
                match code {
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Char(c) => input.insert_char(c),
                    _ => {}
                }
            }
        }
    }
}
