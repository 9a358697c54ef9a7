use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const BLOCK_TITLE: &str = "Tasks";

/// Render the task list widget according to state.
///
pub fn task_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let border_style = if *state.current_focus() == Focus::List || state.is_editing() {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!("{} ({})", BLOCK_TITLE, state.store().current_filter().label()));

    let visible = state.store().visible_tasks();
    if visible.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            "Nothing to show under this filter.",
            styling::muted_text_style(theme),
        ))
        .block(block);
        frame.render_widget(placeholder, size);
        return;
    }

    let editing = state.store().editing().cloned();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|task| {
            let line = match editing.as_ref() {
                Some(session) if session.key == task.key => Line::from(vec![
                    Span::styled("    ", styling::normal_text_style(theme)),
                    Span::styled(
                        format!("{}\u{2502}", session.buffer),
                        styling::editing_style(theme),
                    ),
                ]),
                _ => {
                    let marker = if task.active { "[ ] " } else { "[x] " };
                    let title_style = if task.active {
                        styling::normal_text_style(theme)
                    } else {
                        styling::completed_task_style(theme)
                    };
                    Line::from(vec![
                        Span::styled(marker, styling::normal_text_style(theme)),
                        Span::styled(task.title.clone(), title_style),
                    ])
                }
            };
            ListItem::new(line)
        })
        .collect();

    let highlight = styling::highlight_style(theme);
    let list = List::new(items).block(block).highlight_style(highlight);
    frame.render_stateful_widget(list, size, state.get_tasks_list_state());
}
