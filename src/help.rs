//! Help popup module
//!
//! Keyboard shortcut listing shown over the form.

mod help_content;
pub mod help_popup_render;

pub use help_content::{HELP_ENTRIES, HELP_FOOTER};
