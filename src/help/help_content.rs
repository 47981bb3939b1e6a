/// (key, description) pairs; an empty key marks a section header and an
/// empty pair a blank line
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "FORM"),
    ("Tab", "Accept suggestion, or next field"),
    ("Shift+Tab", "Previous field"),
    ("↑/↓", "Move through suggestions, or between fields"),
    ("Enter", "Request a prediction (all fields must be valid)"),
    ("", ""),
    ("", "GENERAL"),
    ("Esc", "Hide suggestions, or quit"),
    ("F1", "Toggle this help"),
    ("Ctrl+C", "Quit"),
];

pub const HELP_FOOTER: &str = "Press F1 or Esc to close";

#[cfg(test)]
#[path = "help_content_tests.rs"]
mod help_content_tests;
