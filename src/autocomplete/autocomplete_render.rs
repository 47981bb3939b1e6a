//! Autocomplete popup rendering
//!
//! Draws the focused field's preview list next to its input box.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::widgets::popup;

// Autocomplete popup display constants
const MAX_POPUP_WIDTH: usize = 70;
const MIN_POPUP_WIDTH: usize = 20;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;

/// Render the preview popup for the focused field
pub fn render_popup(app: &App, frame: &mut Frame, input_area: Rect) {
    let preview = &app.form.field(app.focus).filtered;
    if !app.autocomplete.is_visible(preview) {
        return;
    }

    let popup_height = (preview.len() as u16) + POPUP_BORDER_HEIGHT;
    let max_text_width = preview
        .iter()
        .map(|option| option.width())
        .max()
        .unwrap_or(MIN_POPUP_WIDTH)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_width = (max_text_width as u16) + POPUP_PADDING;

    let popup_area = popup::popup_near_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );

    let selected = app.autocomplete.selected_index();
    let items: Vec<ListItem> = preview
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let line = if i == selected {
                // Highlight selected item with high contrast colors
                Line::from(Span::styled(
                    format!("► {}", option),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", option),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
