use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of entries in a field's autocomplete preview
pub const MAX_PREVIEW: usize = 5;

/// Identifier of a predictable attribute
///
/// Serializes to the snake_case name the prediction service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    ClassOfAdmission,
    CountryOfCitizenship,
    ForeignWorkerInfoEducation,
    ForeignWorkerInfoMajor,
    JobInfoWorkState,
    PwSocTitle,
}

impl FieldId {
    pub const COUNT: usize = 6;

    /// All fields, in form order
    pub const ALL: [FieldId; FieldId::COUNT] = [
        FieldId::ClassOfAdmission,
        FieldId::CountryOfCitizenship,
        FieldId::ForeignWorkerInfoEducation,
        FieldId::ForeignWorkerInfoMajor,
        FieldId::JobInfoWorkState,
        FieldId::PwSocTitle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::ClassOfAdmission => "class_of_admission",
            FieldId::CountryOfCitizenship => "country_of_citizenship",
            FieldId::ForeignWorkerInfoEducation => "foreign_worker_info_education",
            FieldId::ForeignWorkerInfoMajor => "foreign_worker_info_major",
            FieldId::JobInfoWorkState => "job_info_work_state",
            FieldId::PwSocTitle => "pw_soc_title",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::ClassOfAdmission => "Class of admission",
            FieldId::CountryOfCitizenship => "Country of citizenship",
            FieldId::ForeignWorkerInfoEducation => "Education",
            FieldId::ForeignWorkerInfoMajor => "Major",
            FieldId::JobInfoWorkState => "Work state",
            FieldId::PwSocTitle => "Job title",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == name)
    }

    /// Position of this field in `ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Following field, wrapping to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Preceding field, wrapping to the last
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field's text was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Text does not exactly name a known option
    Incorrect,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Incorrect => write!(f, "incorrect"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// Nothing has been validated yet
    #[default]
    Pristine,
    Valid,
    Invalid(ValidationError),
}

/// One predictable attribute and its autocomplete state
#[derive(Debug, Clone, Default)]
pub struct Field {
    pub options: Vec<String>,
    pub filtered: Vec<String>,
    pub selected: Option<String>,
    pub validity: Validity,
    pub touched: bool,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the option list and reset everything derived from it
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.filtered.clear();
        self.selected = None;
        self.validity = Validity::Pristine;
        self.touched = false;
    }

    /// Apply a change of the field's raw text
    ///
    /// Empty text only clears the preview. Anything else re-filters the
    /// options and selects the first match when the normalized text names it
    /// exactly.
    pub fn handle_input(&mut self, raw: &str) {
        self.touched = true;

        if raw.is_empty() {
            self.filtered.clear();
            return;
        }

        let needle = raw.trim().to_lowercase();
        self.filtered = filter_options(&self.options, &needle);

        match self.filtered.first() {
            Some(first) if first.trim().to_lowercase() == needle => {
                self.selected = Some(first.clone());
                self.validity = Validity::Valid;
            }
            _ => {
                self.validity = Validity::Invalid(ValidationError::Incorrect);
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self.validity {
            Validity::Invalid(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the error state should be displayed
    ///
    /// An invalid field only shows its error once it has been edited or a
    /// submission was attempted.
    pub fn shows_error(&self, submitted: bool) -> bool {
        self.error().is_some() && (self.touched || submitted)
    }
}

/// Options whose lower-cased form contains `needle`, in source order,
/// capped at `MAX_PREVIEW`
///
/// `needle` must already be lower-cased.
pub fn filter_options(options: &[String], needle: &str) -> Vec<String> {
    options
        .iter()
        .filter(|option| option.to_lowercase().contains(needle))
        .take(MAX_PREVIEW)
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod field_tests;
