use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::App;
use crate::autocomplete;
use crate::form::FieldId;
use crate::help::help_popup_render;
use crate::notification::render_notification;

const TITLE: &str = "Visa Predictor";
const FIELD_HEIGHT: u16 = 3;
const STATUS_HINT: &str = " Tab accept/next · ↑↓ move · Enter predict · F1 help · Esc quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(FieldId::ALL.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Min(3));
        constraints.push(Constraint::Length(1));

        let layout = Layout::vertical(constraints).split(frame.area());

        let title_area = layout[0];
        let field_areas = &layout[1..=FieldId::COUNT];
        let result_area = layout[FieldId::COUNT + 1];
        let status_area = layout[FieldId::COUNT + 2];

        self.render_title(frame, title_area);
        for (id, area) in FieldId::ALL.into_iter().zip(field_areas.iter()) {
            self.render_field(frame, id, *area);
        }
        self.render_result(frame, result_area);
        if !render_notification(frame, &self.notification, status_area) {
            frame.render_widget(
                Paragraph::new(STATUS_HINT).style(Style::default().fg(Color::DarkGray)),
                status_area,
            );
        }

        // Popups go last so they draw over the form
        autocomplete::render_popup(self, frame, field_areas[self.focus.index()]);
        if self.help_visible {
            help_popup_render::render_popup(frame);
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let accuracy = match &self.form.accuracy {
            Some(accuracy) => Span::styled(accuracy.to_string(), Style::default().fg(Color::Green)),
            None => Span::styled("loading…", Style::default().fg(Color::DarkGray)),
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", TITLE),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("· model accuracy: ", Style::default().fg(Color::DarkGray)),
            accuracy,
            Span::styled(
                format!(" · {}", self.server_url),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_field(&mut self, frame: &mut Frame, id: FieldId, area: Rect) {
        let field = self.form.field(id);
        let focused = id == self.focus;

        // Set border color based on focus and validity
        let border_color = if field.shows_error(self.form.submitted) {
            Color::Red
        } else if focused {
            Color::Cyan
        } else if field.is_valid() {
            Color::Green
        } else {
            Color::DarkGray
        };

        let title = match field.error() {
            Some(err) if field.shows_error(self.form.submitted) => {
                format!(" {} ({}) ", id.label(), err)
            }
            _ => format!(" {} ", id.label()),
        };

        let textarea = &mut self.inputs[id.index()];
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        );
        textarea.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });

        frame.render_widget(&*textarea, area);
    }

    fn render_result(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Prediction ")
            .border_style(Style::default().fg(Color::DarkGray));

        let content = match &self.form.result {
            Some(result) => Paragraph::new(result.to_string())
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            None if self.is_predicting() => {
                Paragraph::new("Predicting…").style(Style::default().fg(Color::DarkGray))
            }
            None if !self.options_loaded => Paragraph::new("Loading options…")
                .style(Style::default().fg(Color::DarkGray)),
            None => Paragraph::new("Fill in every field and press Enter")
                .style(Style::default().fg(Color::DarkGray)),
        };

        frame.render_widget(content.block(block).wrap(Wrap { trim: true }), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
