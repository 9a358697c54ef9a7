use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "New task";
const PLACEHOLDER: &str = "What needs to be done?";

/// Render the input line widget according to state.
///
pub fn input(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(BLOCK_TITLE);
    if *state.current_focus() == Focus::Input && !state.is_editing() {
        block = block.border_style(styling::active_block_border_style(theme));
    }

    let contents = if state.input_value().is_empty() {
        Span::styled(PLACEHOLDER, styling::muted_text_style(theme))
    } else if *state.current_focus() == Focus::Input && !state.is_editing() {
        Span::styled(
            format!("{}\u{2502}", state.input_value()),
            styling::normal_text_style(theme),
        )
    } else {
        Span::styled(
            state.input_value().to_string(),
            styling::normal_text_style(theme),
        )
    };

    frame.render_widget(Paragraph::new(contents).block(block), size);
}
