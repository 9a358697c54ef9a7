use super::Frame;
use crate::state::State;
use crate::store::Filter;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the footer widget according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let store = state.store();

    let active_count = store.active_count();
    let items_left = if active_count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", active_count)
    };

    let mut spans = vec![
        Span::styled(items_left, styling::normal_text_style(theme)),
        Span::styled("  \u{2502}  ", styling::muted_text_style(theme)),
    ];
    for (index, filter) in [Filter::All, Filter::Active, Filter::Completed]
        .iter()
        .enumerate()
    {
        let style = if *filter == store.current_filter() {
            styling::selected_filter_style(theme)
        } else {
            styling::muted_text_style(theme)
        };
        spans.push(Span::styled(
            format!("{}:{}", index + 1, filter.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    if active_count != store.tasks().len() {
        spans.push(Span::styled(
            " \u{2502}  c: clear completed",
            styling::muted_text_style(theme),
        ));
    }
    if !store.is_empty() {
        spans.push(Span::styled(
            "  \u{2502}  a: toggle all",
            styling::muted_text_style(theme),
        ));
    }

    let hints = if state.is_editing() {
        " Enter: save  Esc: cancel"
    } else {
        " i: new  Space: toggle  e: edit  d: delete  Tab: filter  L: log  q: quit"
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(styling::normal_block_border_style(theme));
    let paragraph = Paragraph::new(vec![
        Line::from(spans),
        Line::from(Span::styled(hints, styling::muted_text_style(theme))),
    ])
    .block(block);
    frame.render_widget(paragraph, size);
}
