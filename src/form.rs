//! Form state for the prediction request
//!
//! Holds one `Field` per predictable attribute, the autocomplete filtering
//! and validation applied on every keystroke, and the submission gate.

mod field;
mod form_state;

pub use field::{Field, FieldId, MAX_PREVIEW, ValidationError, Validity, filter_options};
pub use form_state::FormState;
