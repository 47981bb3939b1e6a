use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::api::PredictionRequest;
use crate::autocomplete::AutocompleteState;
use crate::form::{FieldId, FormState};
use crate::notification::NotificationState;
use crate::worker::{WorkerChannels, WorkerRequest, WorkerResponse};

/// Application state
pub struct App {
    pub form: FormState,
    pub inputs: [TextArea<'static>; FieldId::COUNT],
    pub focus: FieldId,
    pub autocomplete: AutocompleteState,
    pub notification: NotificationState,
    pub help_visible: bool,
    pub server_url: String,
    pub options_loaded: bool,
    pub pending_predictions: usize,
    pub should_quit: bool,
    request_tx: Sender<WorkerRequest>,
    response_rx: Receiver<WorkerResponse>,
}

fn new_input() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea
}

impl App {
    /// Create the app and ask the worker for options and accuracy
    pub fn new(channels: WorkerChannels, server_url: impl Into<String>) -> Self {
        let mut app = Self {
            form: FormState::new(),
            inputs: std::array::from_fn(|_| new_input()),
            focus: FieldId::ALL[0],
            autocomplete: AutocompleteState::new(),
            notification: NotificationState::new(),
            help_visible: false,
            server_url: server_url.into(),
            options_loaded: false,
            pending_predictions: 0,
            should_quit: false,
            request_tx: channels.request_tx,
            response_rx: channels.response_rx,
        };

        app.send(WorkerRequest::LoadOptions);
        app.send(WorkerRequest::LoadAccuracy);
        app
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current text of a field's input box
    pub fn input_text(&self, id: FieldId) -> &str {
        self.inputs[id.index()]
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace a field's text and validate it as if it had been typed
    pub fn set_input_text(&mut self, id: FieldId, text: &str) {
        let textarea = &mut self.inputs[id.index()];
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        textarea.delete_line_by_head();
        textarea.insert_str(text);
        self.on_input_changed(id);
    }

    /// Run the validator on a field's current text
    pub fn on_input_changed(&mut self, id: FieldId) {
        let text = self.input_text(id).to_string();
        self.form.on_input(id, &text);
        if id == self.focus {
            self.autocomplete.reset();
        }
    }

    pub fn set_focus(&mut self, id: FieldId) {
        if id != self.focus {
            self.focus = id;
            self.autocomplete.reset();
        }
    }

    /// Replace the focused field's text with the highlighted preview entry
    ///
    /// Returns false when there is no preview to accept from.
    pub fn accept_suggestion(&mut self) -> bool {
        let preview = &self.form.field(self.focus).filtered;
        if !self.autocomplete.is_visible(preview) {
            return false;
        }
        let Some(choice) = self.autocomplete.selected(preview).map(str::to_string) else {
            return false;
        };

        self.set_input_text(self.focus, &choice);
        self.autocomplete.dismiss();
        true
    }

    /// Dispatch a prediction if every field is valid
    ///
    /// Invalid forms are silently ignored; the fields themselves show why.
    pub fn submit(&mut self) {
        if let Some(request) = self.form.submit() {
            self.dispatch_prediction(request);
        }
    }

    fn dispatch_prediction(&mut self, request: PredictionRequest) {
        if self.send(WorkerRequest::Predict(request)) {
            self.pending_predictions += 1;
        }
    }

    fn send(&mut self, request: WorkerRequest) -> bool {
        match self.request_tx.send(request) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Prediction worker is gone: {:?}", e.0);
                self.notification
                    .show_error("Prediction worker stopped; restart the application");
                false
            }
        }
    }

    /// Apply every response the worker has produced so far
    pub fn poll_worker(&mut self) {
        loop {
            match self.response_rx.try_recv() {
                Ok(response) => self.apply_response(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.pending_predictions > 0 {
                        self.pending_predictions = 0;
                        self.notification.show_error("Prediction worker stopped");
                    }
                    break;
                }
            }
        }
    }

    pub fn apply_response(&mut self, response: WorkerResponse) {
        match response {
            WorkerResponse::Options(Ok(options)) => {
                let count = options.len();
                for id in options.keys() {
                    self.clear_input(*id);
                }
                self.form.populate(options);
                self.autocomplete.reset();
                self.options_loaded = true;
                log::info!("Loaded options for {} fields", count);
                self.notification
                    .show_info(format!("Loaded options for {} fields", count));
            }
            WorkerResponse::Options(Err(e)) => {
                self.notification
                    .show_error(format!("Could not load options: {}", e));
            }
            WorkerResponse::Accuracy(Ok(accuracy)) => {
                log::info!("Model accuracy: {}", accuracy);
                self.form.accuracy = Some(accuracy);
            }
            WorkerResponse::Accuracy(Err(e)) => {
                self.notification
                    .show_error(format!("Could not load accuracy: {}", e));
            }
            WorkerResponse::Prediction(result) => {
                self.pending_predictions = self.pending_predictions.saturating_sub(1);
                match result {
                    Ok(prediction) => {
                        log::info!("Prediction: {}", prediction);
                        self.form.result = Some(prediction);
                        self.notification.dismiss();
                    }
                    Err(e) => {
                        self.notification
                            .show_error(format!("Prediction failed: {}", e));
                    }
                }
            }
        }
    }

    /// Empty a field's text box without running the validator
    fn clear_input(&mut self, id: FieldId) {
        self.inputs[id.index()] = new_input();
    }

    pub fn is_predicting(&self) -> bool {
        self.pending_predictions > 0
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
