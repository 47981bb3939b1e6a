//! Terminal form for a visa application prediction service
//!
//! Six autocomplete fields are filled from option lists served by the
//! backend; once every field names a known option the selections are sent
//! for a prediction.

pub mod api;
pub mod app;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod form;
pub mod help;
pub mod logging;
pub mod notification;
pub mod widgets;
pub mod worker;


pub use error::PredictorError;
