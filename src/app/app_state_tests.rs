//! Tests for App state transitions

use crate::api::{Accuracy, PredictionRequest, PredictionResult};
use crate::error::PredictorError;
use crate::form::{FieldId, Validity};
use crate::notification::NotificationLevel;
use crate::test_utils::test_helpers::*;
use crate::worker::{WorkerRequest, WorkerResponse};

#[test]
fn test_startup_requests_options_and_accuracy() {
    let test = test_app();

    assert_eq!(
        test.sent(),
        vec![WorkerRequest::LoadOptions, WorkerRequest::LoadAccuracy]
    );
    assert!(!test.app.options_loaded);
    assert_eq!(test.app.focus, FieldId::ClassOfAdmission);
    assert!(!test.app.should_quit());
}

#[test]
fn test_options_response_populates_form() {
    let test = loaded_app();

    assert!(test.app.options_loaded);
    assert_eq!(
        test.app.form.field(FieldId::CountryOfCitizenship).options,
        strings(&["France", "Germany"])
    );
    let notification = test.app.notification.current().unwrap();
    assert_eq!(notification.level, NotificationLevel::Info);
    assert!(notification.message.contains("6 fields"));
}

#[test]
fn test_options_response_clears_existing_text() {
    let mut test = loaded_app();
    test.app.set_input_text(FieldId::JobInfoWorkState, "texas");
    assert!(test.app.form.field(FieldId::JobInfoWorkState).is_valid());

    test.app
        .apply_response(WorkerResponse::Options(Ok(test_options())));

    assert_eq!(test.app.input_text(FieldId::JobInfoWorkState), "");
    let field = test.app.form.field(FieldId::JobInfoWorkState);
    assert_eq!(field.selected, None);
    assert_eq!(field.validity, Validity::Pristine);
}

#[test]
fn test_options_failure_shows_error() {
    let mut test = test_app();

    test.app.apply_response(WorkerResponse::Options(Err(PredictorError::Network(
        "connection refused".to_string(),
    ))));

    assert!(!test.app.options_loaded);
    let notification = test.app.notification.current().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert!(notification.message.contains("Could not load options"));
}

#[test]
fn test_accuracy_response_is_stored() {
    let mut test = test_app();

    test.app
        .apply_response(WorkerResponse::Accuracy(Ok(Accuracy::new(0.8734).unwrap())));

    assert_eq!(test.app.form.accuracy.unwrap().to_string(), "87.34%");
}

#[test]
fn test_set_input_text_validates() {
    let mut test = loaded_app();

    test.app.set_input_text(FieldId::CountryOfCitizenship, "germ");
    assert_eq!(test.app.input_text(FieldId::CountryOfCitizenship), "germ");
    assert!(!test.app.form.field(FieldId::CountryOfCitizenship).is_valid());

    test.app.set_input_text(FieldId::CountryOfCitizenship, "Germany");
    assert_eq!(test.app.input_text(FieldId::CountryOfCitizenship), "Germany");
    assert!(test.app.form.field(FieldId::CountryOfCitizenship).is_valid());
}

#[test]
fn test_submit_sends_exactly_one_prediction() {
    let mut test = loaded_app();
    fill_valid(&mut test.app);

    test.app.submit();

    let sent = test.sent();
    assert_eq!(sent.len(), 1);
    let WorkerRequest::Predict(request) = &sent[0] else {
        panic!("expected a prediction request, got {:?}", sent[0]);
    };
    let mut expected = PredictionRequest::new();
    expected.insert(FieldId::ClassOfAdmission, "H-1B".to_string());
    expected.insert(FieldId::CountryOfCitizenship, "Germany".to_string());
    expected.insert(FieldId::ForeignWorkerInfoEducation, "Master's".to_string());
    expected.insert(FieldId::ForeignWorkerInfoMajor, "COMPUTER SCIENCE".to_string());
    expected.insert(FieldId::JobInfoWorkState, "TEXAS".to_string());
    expected.insert(FieldId::PwSocTitle, "Computer Programmers".to_string());
    assert_eq!(request, &expected);
    assert!(test.app.is_predicting());
}

#[test]
fn test_submit_with_invalid_field_sends_nothing() {
    let mut test = loaded_app();
    fill_valid(&mut test.app);
    test.app.set_input_text(FieldId::JobInfoWorkState, "tex");

    test.app.submit();

    assert!(test.sent().is_empty());
    assert!(!test.app.is_predicting());
    assert!(test.app.form.submitted);
}

#[test]
fn test_prediction_response_sets_result() {
    let mut test = loaded_app();
    fill_valid(&mut test.app);
    test.app.submit();

    test.app.apply_response(WorkerResponse::Prediction(Ok(PredictionResult::new(
        serde_json::json!("Certified"),
    ))));

    assert_eq!(test.app.form.result.as_ref().unwrap().to_string(), "Certified");
    assert!(!test.app.is_predicting());
}

#[test]
fn test_prediction_failure_keeps_result_empty() {
    let mut test = loaded_app();
    fill_valid(&mut test.app);
    test.app.submit();

    test.app.apply_response(WorkerResponse::Prediction(Err(PredictorError::Api {
        code: 500,
        message: "boom".to_string(),
    })));

    assert!(test.app.form.result.is_none());
    assert!(!test.app.is_predicting());
    let notification = test.app.notification.current().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert!(notification.message.contains("Prediction failed"));
}

#[test]
fn test_prediction_success_clears_stale_error() {
    let mut test = loaded_app();
    fill_valid(&mut test.app);
    test.app.submit();
    test.app.apply_response(WorkerResponse::Prediction(Err(PredictorError::Network(
        "connection reset".to_string(),
    ))));
    assert!(test.app.notification.current().is_some());

    test.app.submit();
    test.app.apply_response(WorkerResponse::Prediction(Ok(PredictionResult::new(
        serde_json::json!("Certified"),
    ))));

    assert!(test.app.notification.current().is_none());
    assert_eq!(test.app.form.result.as_ref().unwrap().to_string(), "Certified");
}

#[test]
fn test_typing_after_result_clears_it() {
    let mut test = loaded_app();
    test.app.form.result = Some(PredictionResult::new(serde_json::json!("Denied")));

    test.app.set_input_text(FieldId::PwSocTitle, "c");

    assert!(test.app.form.result.is_none());
}

#[test]
fn test_poll_worker_applies_queued_responses() {
    let mut test = loaded_app();

    test.responses
        .send(WorkerResponse::Accuracy(Ok(Accuracy::new(0.5).unwrap())))
        .unwrap();
    test.app.poll_worker();

    assert_eq!(test.app.form.accuracy.unwrap().to_string(), "50.00%");
}

#[test]
fn test_poll_worker_reports_dead_worker_with_pending_prediction() {
    let mut test = loaded_app();
    fill_valid(&mut test.app);
    test.app.submit();

    let crate::test_utils::test_helpers::TestApp {
        mut app, responses, ..
    } = test;
    drop(responses);
    app.poll_worker();

    assert!(!app.is_predicting());
    assert_eq!(
        app.notification.current().unwrap().level,
        NotificationLevel::Error
    );
}

#[test]
fn test_send_to_dead_worker_shows_error() {
    let test = loaded_app();
    let crate::test_utils::test_helpers::TestApp { mut app, requests, .. } = test;
    drop(requests);
    fill_valid(&mut app);

    app.submit();

    assert!(!app.is_predicting());
    assert!(app
        .notification
        .current()
        .unwrap()
        .message
        .contains("worker stopped"));
}

#[test]
fn test_accept_suggestion_fills_field() {
    let mut test = loaded_app();
    test.app.set_input_text(FieldId::ClassOfAdmission, "h-1");

    assert!(test.app.accept_suggestion());

    assert_eq!(test.app.input_text(FieldId::ClassOfAdmission), "H-1B");
    assert!(test.app.form.field(FieldId::ClassOfAdmission).is_valid());
}

#[test]
fn test_accept_suggestion_without_preview() {
    let mut test = loaded_app();
    assert!(!test.app.accept_suggestion());
}
