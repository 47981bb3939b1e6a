//! Tests for help content

use super::*;

#[test]
fn test_help_mentions_submit_and_quit() {
    let keys: Vec<&str> = HELP_ENTRIES.iter().map(|(key, _)| *key).collect();
    assert!(keys.contains(&"Enter"));
    assert!(keys.contains(&"Ctrl+C"));
    assert!(keys.contains(&"F1"));
}

#[test]
fn test_every_key_has_description() {
    for (key, desc) in HELP_ENTRIES {
        if !key.is_empty() {
            assert!(!desc.is_empty(), "key {} has no description", key);
        }
    }
}

#[test]
fn test_footer_mentions_close_key() {
    assert!(HELP_FOOTER.contains("F1"));
}
