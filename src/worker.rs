//! Prediction service worker thread
//!
//! Runs the HTTP calls on a background thread so the UI never blocks.
//! Requests arrive over a channel and are served one at a time on a
//! current-thread tokio runtime; each produces exactly one response.

use std::sync::mpsc::{self, Receiver, Sender};

use tokio::runtime::Runtime;

use crate::api::{Accuracy, OptionsMap, PredictionRequest, PredictionResult, PredictorApi};
use crate::error::PredictorError;

/// Work the UI can ask for
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerRequest {
    LoadOptions,
    LoadAccuracy,
    Predict(PredictionRequest),
}

/// Outcome of one `WorkerRequest`
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    Options(Result<OptionsMap, PredictorError>),
    Accuracy(Result<Accuracy, PredictorError>),
    Prediction(Result<PredictionResult, PredictorError>),
}

/// UI-side ends of the worker channels
pub struct WorkerChannels {
    pub request_tx: Sender<WorkerRequest>,
    pub response_rx: Receiver<WorkerResponse>,
}

/// Spawn the worker thread for `api`
///
/// The thread exits once the returned request sender is dropped.
pub fn spawn_worker<A>(api: A) -> Result<WorkerChannels, PredictorError>
where
    A: PredictorApi + Send + 'static,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    std::thread::spawn(move || {
        worker_loop(&runtime, &api, request_rx, response_tx);
    });

    Ok(WorkerChannels {
        request_tx,
        response_rx,
    })
}

/// Serve requests until the request channel closes or the UI goes away
fn worker_loop<A: PredictorApi>(
    runtime: &Runtime,
    api: &A,
    request_rx: Receiver<WorkerRequest>,
    response_tx: Sender<WorkerResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = runtime.block_on(handle_request(api, request));
        if response_tx.send(response).is_err() {
            // Main thread disconnected
            break;
        }
    }

    log::debug!("Prediction worker shutting down");
}

async fn handle_request<A: PredictorApi>(api: &A, request: WorkerRequest) -> WorkerResponse {
    match request {
        WorkerRequest::LoadOptions => {
            let result = api.fetch_options().await;
            log_failure("options", &result);
            WorkerResponse::Options(result)
        }
        WorkerRequest::LoadAccuracy => {
            let result = api.fetch_accuracy().await;
            log_failure("accuracy", &result);
            WorkerResponse::Accuracy(result)
        }
        WorkerRequest::Predict(body) => {
            let result = api.predict(&body).await;
            log_failure("prediction", &result);
            WorkerResponse::Prediction(result)
        }
    }
}

fn log_failure<T>(what: &str, result: &Result<T, PredictorError>) {
    if let Err(e) = result {
        log::error!("Failed to fetch {}: {}", what, e);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
