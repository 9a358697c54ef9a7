use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::Paragraph,
};

/// Render the full screen layout according to state.
///
pub fn main(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    let constraints = if state.is_log_shown() {
        vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(8),
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    banner(frame, chunks[0], state);
    super::input::input(frame, chunks[1], state);
    super::task_list::task_list(frame, chunks[2], state);
    super::footer::footer(frame, chunks[3], state);
    if state.is_log_shown() {
        super::log::log(frame, chunks[4], state);
    }
}

/// Render the application banner.
///
fn banner(frame: &mut Frame, size: ratatui::layout::Rect, state: &State) {
    let banner = Paragraph::new("t o d o s")
        .style(styling::banner_style(state.get_theme()))
        .alignment(Alignment::Center);
    frame.render_widget(banner, size);
}
