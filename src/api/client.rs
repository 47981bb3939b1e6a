//! HTTP client for the prediction service

use std::future::Future;

use reqwest::header::ACCEPT;

use super::types::{
    Accuracy, OptionsMap, PredictionRequest, PredictionResult, decode_accuracy, decode_options,
    decode_prediction,
};
use crate::error::PredictorError;

pub const OPTIONS_PATH: &str = "/options/";
pub const ACCURACY_PATH: &str = "/accuracy/";
pub const PREDICT_PATH: &str = "/predict/";

const JSON_CONTENT: &str = "application/json";

/// Operations offered by the prediction service
///
/// The worker is generic over this so tests can substitute a recording fake.
pub trait PredictorApi {
    fn fetch_options(&self) -> impl Future<Output = Result<OptionsMap, PredictorError>>;

    fn fetch_accuracy(&self) -> impl Future<Output = Result<Accuracy, PredictorError>>;

    fn predict(
        &self,
        request: &PredictionRequest,
    ) -> impl Future<Output = Result<PredictionResult, PredictorError>>;
}

/// `reqwest`-backed client rooted at the service's base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get(&self, path: &str) -> Result<String, PredictorError> {
        let url = self.url(path);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, JSON_CONTENT)
            .send()
            .await?;

        read_body(response).await
    }
}

/// Read a response body, turning non-2xx statuses into `Api` errors
async fn read_body(response: reqwest::Response) -> Result<String, PredictorError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(PredictorError::Api {
            code: status.as_u16(),
            message: body,
        });
    }
    Ok(body)
}

impl PredictorApi for HttpClient {
    async fn fetch_options(&self) -> Result<OptionsMap, PredictorError> {
        let body = self.get(OPTIONS_PATH).await?;
        decode_options(&body)
    }

    async fn fetch_accuracy(&self) -> Result<Accuracy, PredictorError> {
        let body = self.get(ACCURACY_PATH).await?;
        decode_accuracy(&body)
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictorError> {
        let url = self.url(PREDICT_PATH);
        log::debug!("POST {}", url);

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&url)
            .header(ACCEPT, JSON_CONTENT)
            .json(request)
            .send()
            .await?;

        let body = read_body(response).await?;
        decode_prediction(&body)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
