use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title("Log (L to hide)")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    // Show the tail that fits inside the pane, newest last
    let entries = state.get_log_entries();
    let capacity = size.height.saturating_sub(2) as usize;
    let skip = entries.len().saturating_sub(capacity);
    let items: Vec<ListItem> = entries
        .iter()
        .skip(skip)
        .map(|entry| {
            ListItem::new(Line::from(vec![Span::styled(
                entry.clone(),
                styling::muted_text_style(theme),
            )]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, size);
}
