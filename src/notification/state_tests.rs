//! Tests for NotificationState

use super::*;

#[test]
fn test_new_state_is_empty() {
    let state = NotificationState::new();
    assert!(state.current().is_none());
}

#[test]
fn test_show_replaces_previous() {
    let mut state = NotificationState::new();
    state.show_info("first");
    state.show_error("second");

    let current = state.current().unwrap();
    assert_eq!(current.message, "second");
    assert_eq!(current.level, NotificationLevel::Error);
}

#[test]
fn test_info_expires() {
    let mut state = NotificationState::new();
    state.show_info("loaded");
    let created = state.current().unwrap().created_at;

    state.clear_expired_at(created + Duration::from_secs(1));
    assert!(state.current().is_some());

    state.clear_expired_at(created + INFO_DURATION);
    assert!(state.current().is_none());
}

#[test]
fn test_warning_outlives_info() {
    let mut state = NotificationState::new();
    state.show_warning("bad config");
    let created = state.current().unwrap().created_at;

    state.clear_expired_at(created + INFO_DURATION);
    assert!(state.current().is_some());

    state.clear_expired_at(created + WARNING_DURATION);
    assert!(state.current().is_none());
}

#[test]
fn test_error_never_expires() {
    let mut state = NotificationState::new();
    state.show_error("server down");
    let created = state.current().unwrap().created_at;

    state.clear_expired_at(created + Duration::from_secs(3600));
    assert!(state.current().is_some());
}

#[test]
fn test_dismiss() {
    let mut state = NotificationState::new();
    state.show_error("x");
    state.dismiss();
    assert!(state.current().is_none());
}
