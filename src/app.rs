// App state and main event loop.
// Applies finished fetches, then maps keyboard input onto console actions.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;

use crate::fetch::{FetchRequest, Fetcher};
use crate::state::{DebugConsole, LogsFocus, Tab};
use crate::ui;

const RESULT_PAGE: u16 = 20;

/// Main application state.
pub struct App {
    /// Tab selection and panel state.
    pub console: DebugConsole,
    /// Runs debug API requests in the background.
    fetcher: Fetcher,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    /// Create the app and issue the startup fetches.
    pub fn new(fetcher: Fetcher) -> Self {
        let (console, initial) = DebugConsole::new();
        let mut app = Self {
            console,
            fetcher,
            show_help: false,
            should_quit: false,
        };
        for request in initial {
            app.fetcher.dispatch(request);
        }
        app
    }

    /// Requests dispatched but not yet applied.
    pub fn pending(&self) -> usize {
        self.fetcher.in_flight()
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            self.apply_completions();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Apply every finished fetch, in the order they finished.
    pub fn apply_completions(&mut self) {
        while let Some(completion) = self.fetcher.try_next() {
            self.console.apply(completion);
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle a single key press, dispatching any fetch it asks for.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(request) = self.key_request(key) {
            self.fetcher.dispatch(request);
        }
    }

    /// Apply a key press to the state and return the fetch it needs, if any.
    fn key_request(&mut self, key: KeyEvent) -> Option<FetchRequest> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return None;
        }

        match key.code {
            KeyCode::Tab => {
                let next = self.console.view.current_tab().next();
                self.console.view.set_tab(next);
                return None;
            }
            KeyCode::BackTab => {
                let prev = self.console.view.current_tab().prev();
                self.console.view.set_tab(prev);
                return None;
            }
            _ => {}
        }

        match self.console.view.current_tab() {
            // The code tab takes free text, so only Tab, Ctrl-C, and editing
            // keys mean anything there.
            Tab::Code => self.code_key(key),
            Tab::Mods | Tab::Logs => match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    None
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                    None
                }
                KeyCode::Char(c @ '1'..='3') => {
                    let index = c as usize - '1' as usize;
                    self.console.view.set_tab(Tab::ALL[index]);
                    None
                }
                _ if self.console.view.is_active(Tab::Mods) => self.mods_key(key),
                _ => self.logs_key(key),
            },
        }
    }

    fn code_key(&mut self, key: KeyEvent) -> Option<FetchRequest> {
        let search = &mut self.console.search;
        match key.code {
            KeyCode::Enter => return Some(search.submit_search()),
            KeyCode::Esc => search.clear_input(),
            KeyCode::Backspace => search.pop_char(),
            KeyCode::Up => search.scroll_up(1),
            KeyCode::Down => search.scroll_down(1),
            KeyCode::PageUp => search.scroll_up(RESULT_PAGE),
            KeyCode::PageDown => search.scroll_down(RESULT_PAGE),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search.push_char(c)
            }
            _ => {}
        }
        None
    }

    fn mods_key(&mut self, key: KeyEvent) -> Option<FetchRequest> {
        let mods = &mut self.console.mods;
        match key.code {
            KeyCode::Char('r') => return Some(mods.refresh_mods(false)),
            KeyCode::Char('R') => return Some(mods.refresh_mods(true)),
            KeyCode::Up | KeyCode::Char('k') => mods.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => mods.select_next(),
            _ => {}
        }
        None
    }

    fn logs_key(&mut self, key: KeyEvent) -> Option<FetchRequest> {
        let logs = &mut self.console.logs;
        match key.code {
            KeyCode::Char('r') => return Some(logs.refresh_log_inventory()),
            KeyCode::Up | KeyCode::Char('k') => logs.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => logs.cursor_down(),
            KeyCode::Left | KeyCode::Char('h') => logs.focus(LogsFocus::Areas),
            KeyCode::Right | KeyCode::Char('l') => logs.focus(LogsFocus::Files),
            KeyCode::Enter => match logs.cursor.focus {
                LogsFocus::Areas => {
                    if let Some(area) = logs.highlighted_area().map(str::to_string) {
                        self.console.select_area(&area);
                    }
                }
                LogsFocus::Files => {
                    if let Some(file) = logs.highlighted_file().map(str::to_string) {
                        self.console.select_file(&file);
                    }
                }
            },
            _ => {}
        }
        None
    }
}
