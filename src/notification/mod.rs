//! Notification module
//!
//! A single transient status message shown in the footer. Used for load
//! and prediction failures and for config warnings.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationLevel, NotificationState};
