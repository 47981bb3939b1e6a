use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::{NotificationLevel, NotificationState};

/// Render the current notification into a one-line area
///
/// Returns false when there is nothing to show so the caller can draw
/// something else there.
pub fn render_notification(frame: &mut Frame, state: &NotificationState, area: Rect) -> bool {
    let Some(notification) = state.current() else {
        return false;
    };

    let (label, color) = match notification.level {
        NotificationLevel::Info => ("info", Color::Cyan),
        NotificationLevel::Warning => ("warning", Color::Yellow),
        NotificationLevel::Error => ("error", Color::Red),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", notification.message), Style::default().fg(color)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
    true
}
