use crate::api::{Accuracy, OptionsMap, PredictionRequest, PredictionResult};

use super::field::{Field, FieldId};

/// The whole form: every field plus what the service reported back
#[derive(Debug, Clone)]
pub struct FormState {
    fields: [Field; FieldId::COUNT],
    pub result: Option<PredictionResult>,
    pub accuracy: Option<Accuracy>,
    pub submitted: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: std::array::from_fn(|_| Field::new()),
            result: None,
            accuracy: None,
            submitted: false,
        }
    }

    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.index()]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut Field {
        &mut self.fields[id.index()]
    }

    /// Fields paired with their identifiers, in form order
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &Field)> {
        FieldId::ALL.into_iter().zip(self.fields.iter())
    }

    /// Install freshly loaded option lists
    ///
    /// Only fields present in `options` are touched; each one gets its
    /// preview and selection reset.
    pub fn populate(&mut self, options: OptionsMap) {
        for (id, values) in options {
            log::debug!("Loaded {} options for {}", values.len(), id);
            self.field_mut(id).set_options(values);
        }
    }

    /// Handle a change of a field's text
    ///
    /// Any non-empty input makes a displayed prediction stale.
    pub fn on_input(&mut self, id: FieldId, raw: &str) {
        if !raw.is_empty() {
            self.result = None;
        }
        self.field_mut(id).handle_input(raw);
    }

    pub fn all_valid(&self) -> bool {
        self.fields.iter().all(Field::is_valid)
    }

    /// Bundle every selection, or `None` if any field is not valid
    pub fn build_request(&self) -> Option<PredictionRequest> {
        if !self.all_valid() {
            return None;
        }

        let mut request = PredictionRequest::new();
        for (id, field) in self.fields() {
            request.insert(id, field.selected.clone()?);
        }
        Some(request)
    }

    /// Record a submission attempt and return the request to dispatch
    pub fn submit(&mut self) -> Option<PredictionRequest> {
        self.submitted = true;
        let request = self.build_request();
        if request.is_none() {
            log::debug!("Submission suppressed: form has invalid fields");
        }
        request
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "form_state_tests.rs"]
mod form_state_tests;
