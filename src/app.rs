use crate::config::Config;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::CustomLogger;
use crate::state::State;
use crate::store::{Persistence, TaskStore};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> Result<()> {
        let log_entries = CustomLogger::init()?;
        info!("Starting application...");

        let persist = Persistence::new(config.data_file.clone())?;
        let store = TaskStore::load(persist);
        let theme = Theme::by_name(&config.theme_name);
        let mut app = App {
            state: State::new(store, theme, log_entries),
        };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        Ok(())
    }
}
