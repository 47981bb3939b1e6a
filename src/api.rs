//! Prediction service boundary
//!
//! Payload types and decoders for the three endpoints, plus the HTTP client
//! that talks to them.

mod client;
mod types;

pub use client::{HttpClient, PredictorApi, ACCURACY_PATH, OPTIONS_PATH, PREDICT_PATH};
pub use types::{
    Accuracy, OptionsMap, PredictionRequest, PredictionResult, decode_accuracy, decode_options,
    decode_prediction,
};
