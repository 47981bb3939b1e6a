/// Highlight and visibility of the preview popup for the focused field
///
/// The preview entries themselves live on the form's `Field`; this only
/// tracks how the user is navigating them.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteState {
    selected_index: usize,
    dismissed: bool,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first entry and visible again
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.dismissed = false;
    }

    /// Hide the popup until the next edit
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn is_visible(&self, preview: &[String]) -> bool {
        !self.dismissed && !preview.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected<'a>(&self, preview: &'a [String]) -> Option<&'a str> {
        preview
            .get(self.selected_index)
            .or_else(|| preview.first())
            .map(String::as_str)
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn select_previous(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = if self.selected_index == 0 || self.selected_index >= len {
                len - 1
            } else {
                self.selected_index - 1
            };
        }
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
