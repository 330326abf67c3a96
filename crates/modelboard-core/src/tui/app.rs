//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::form::ModelSink;
use crate::table::TableViewModel;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    state: AppState,
    sink: Box<dyn ModelSink>,
    should_quit: bool,
}

impl App {
    /// Creates a new App over `table`; accepted drafts go to `sink`.
    pub fn new(table: TableViewModel, sink: Box<dyn ModelSink>) -> Self {
        Self {
            state: AppState::new(table),
            sink,
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);
        info!(
            "console started with {} records",
            self.state.table.records().len()
        );

        // Main loop
        let result = loop {
            if let Err(e) = terminal.draw(|frame| render(frame, &self.state)) {
                break Err(e);
            }

            match events.next() {
                Ok(Event::Tick) => self.state.tick(),
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::SubmitModel => {
                        if let Some(outcome) = self.state.submit_create_form(self.sink.as_mut()) {
                            debug!("create-model submit: {:?}", outcome);
                        }
                    }
                    KeyAction::None => {}
                },
                Ok(Event::Resize) => {}
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!("console stopped");

        result
    }
}
