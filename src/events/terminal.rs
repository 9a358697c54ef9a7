use crate::state::{Focus, State};
use crate::store::Filter;
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    tx_clone.send(Event::Input(key)).unwrap();
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => match event {
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                // An open edit session takes every key first
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } if state.is_editing() => {
                    state.commit_edit();
                }
                KeyEvent {
                    code: KeyCode::Esc, ..
                } if state.is_editing() => {
                    state.discard_edit();
                }
                KeyEvent {
                    code: KeyCode::Backspace,
                    ..
                } if state.is_editing() => {
                    state.delete_edit_char();
                }
                KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::NONE,
                    ..
                } if state.is_editing() => {
                    state.add_edit_char(c);
                }
                KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::SHIFT,
                    ..
                } if state.is_editing() => {
                    state.add_edit_char(c);
                }
                // Input line focus - character keys go to the input buffer
                KeyEvent {
                    code: KeyCode::Enter,
                    ..
                } if *state.current_focus() == Focus::Input => {
                    state.submit_input();
                }
                KeyEvent {
                    code: KeyCode::Esc, ..
                } if *state.current_focus() == Focus::Input => {
                    state.focus_list();
                }
                KeyEvent {
                    code: KeyCode::Backspace,
                    ..
                } if *state.current_focus() == Focus::Input => {
                    state.delete_input_char();
                }
                KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::NONE,
                    ..
                } if *state.current_focus() == Focus::Input => {
                    state.add_input_char(c);
                }
                KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::SHIFT,
                    ..
                } if *state.current_focus() == Focus::Input => {
                    state.add_input_char(c);
                }
                // Task list focus
                KeyEvent {
                    code: KeyCode::Char('q'),
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyEvent {
                    code: KeyCode::Char('i'),
                    ..
                } => {
                    state.focus_input();
                }
                KeyEvent {
                    code: KeyCode::Char('j'),
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Down,
                    ..
                } => {
                    state.next_task_index();
                }
                KeyEvent {
                    code: KeyCode::Char('k'),
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Up, ..
                } => {
                    state.previous_task_index();
                }
                KeyEvent {
                    code: KeyCode::Char(' '),
                    ..
                } => {
                    state.toggle_selected();
                }
                KeyEvent {
                    code: KeyCode::Char('e'),
                    ..
                } => {
                    state.begin_edit_selected();
                }
                KeyEvent {
                    code: KeyCode::Char('d'),
                    ..
                } => {
                    state.remove_selected();
                }
                KeyEvent {
                    code: KeyCode::Char('a'),
                    ..
                } => {
                    state.toggle_all_complete();
                }
                KeyEvent {
                    code: KeyCode::Char('c'),
                    ..
                } => {
                    state.clear_completed();
                }
                KeyEvent {
                    code: KeyCode::Char('1'),
                    ..
                } => {
                    state.set_filter(Filter::All);
                }
                KeyEvent {
                    code: KeyCode::Char('2'),
                    ..
                } => {
                    state.set_filter(Filter::Active);
                }
                KeyEvent {
                    code: KeyCode::Char('3'),
                    ..
                } => {
                    state.set_filter(Filter::Completed);
                }
                KeyEvent {
                    code: KeyCode::Tab, ..
                } => {
                    state.next_filter();
                }
                KeyEvent {
                    code: KeyCode::Char('L'),
                    ..
                } => {
                    state.toggle_log_view();
                }
                _ => {
                    trace!("Ignoring terminal event '{:?}'.", event);
                }
            },
            Event::Tick => {}
        }
        Ok(true)
    }
}
