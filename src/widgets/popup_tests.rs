//! Tests for widgets/popup

use super::*;

fn screen() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 50,
    }
}

#[test]
fn test_centered_popup_basic() {
    let popup = centered_popup(screen(), 40, 20);

    assert_eq!(popup.x, 30);
    assert_eq!(popup.y, 15);
    assert_eq!(popup.width, 40);
    assert_eq!(popup.height, 20);
}

#[test]
fn test_centered_popup_too_large_is_clamped() {
    let popup = centered_popup(screen(), 200, 100);

    assert_eq!(popup.width, 100);
    assert_eq!(popup.height, 50);
    assert_eq!(popup.x, 0);
    assert_eq!(popup.y, 0);
}

#[test]
fn test_popup_above_anchor_no_overflow() {
    let anchor = Rect {
        x: 0,
        y: 5,
        width: 100,
        height: 3,
    };

    let popup = popup_above_anchor(anchor, 80, 10, 0);

    assert_eq!(popup.y, 0);
    assert_eq!(popup.height, 5);
}

#[test]
fn test_popup_below_anchor_basic() {
    let anchor = Rect {
        x: 10,
        y: 4,
        width: 80,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, screen(), 40, 7, 2);

    assert_eq!(popup.x, 12);
    assert_eq!(popup.y, 7);
    assert_eq!(popup.width, 40);
    assert_eq!(popup.height, 7);
}

#[test]
fn test_popup_below_anchor_clipped_to_bounds() {
    let anchor = Rect {
        x: 0,
        y: 44,
        width: 30,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, screen(), 60, 7, 2);

    assert_eq!(popup.y, 47);
    assert_eq!(popup.height, 3);
    assert_eq!(popup.width, 26);
}

#[test]
fn test_popup_near_anchor_prefers_below() {
    let anchor = Rect {
        x: 0,
        y: 20,
        width: 100,
        height: 3,
    };

    let popup = popup_near_anchor(anchor, screen(), 40, 7, 2);

    assert_eq!(popup.y, 23);
    assert_eq!(popup.height, 7);
}

#[test]
fn test_popup_near_anchor_flips_above_when_cramped() {
    let anchor = Rect {
        x: 0,
        y: 44,
        width: 100,
        height: 3,
    };

    let popup = popup_near_anchor(anchor, screen(), 40, 7, 2);

    assert_eq!(popup.y, 37);
    assert_eq!(popup.height, 7);
}
