use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }
        self.handle_field_key(key);
    }

    /// Insert pasted text into the focused field as a single line
    pub fn handle_paste_event(&mut self, text: String) {
        let line = text
            .split(['\r', '\n'])
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if line.is_empty() {
            return;
        }
        let id = self.focus;
        self.inputs[id.index()].insert_str(&line);
        self.on_input_changed(id);
    }

    /// Keys that work regardless of the focused field
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Help popup swallows everything while open
        if self.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q')) {
                self.help_visible = false;
            } else if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
            {
                self.should_quit = true;
            }
            return true;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        let preview_visible = self
            .autocomplete
            .is_visible(&self.form.field(self.focus).filtered);
        let preview_len = self.form.field(self.focus).filtered.len();

        match key.code {
            KeyCode::F(1) => {
                self.help_visible = true;
                true
            }
            KeyCode::Enter => {
                self.submit();
                true
            }
            KeyCode::Esc => {
                if preview_visible {
                    self.autocomplete.dismiss();
                } else {
                    self.should_quit = true;
                }
                true
            }
            KeyCode::Tab => {
                if !self.accept_suggestion() {
                    self.set_focus(self.focus.next());
                }
                true
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.prev());
                true
            }
            KeyCode::Down => {
                if preview_visible {
                    self.autocomplete.select_next(preview_len);
                } else {
                    self.set_focus(self.focus.next());
                }
                true
            }
            KeyCode::Up => {
                if preview_visible {
                    self.autocomplete.select_previous(preview_len);
                } else {
                    self.set_focus(self.focus.prev());
                }
                true
            }
            _ => false,
        }
    }

    /// Forward editing keys to the focused text box
    fn handle_field_key(&mut self, key: KeyEvent) {
        // Fields are single-line
        if is_newline_key(key) {
            return;
        }

        let id = self.focus;
        if self.inputs[id.index()].input(key) {
            self.on_input_changed(id);
        }
    }
}

/// Control sequences the text box would turn into a line break
fn is_newline_key(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j'))
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
