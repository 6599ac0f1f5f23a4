//! Tests for the contact form endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use fabrica::{controller::contact::submit_contact, model::contact::ContactMessageDto};
use fabrica_test_utils::prelude::*;

use crate::util::app_state;

fn submission() -> ContactMessageDto {
    ContactMessageDto {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: Some("+49 30 123456".to_string()),
        message: "Please send a quote for part no. 441.".to_string(),
        language: Some("de".to_string()),
    }
}

/// Tests that a valid submission is forwarded exactly once.
///
/// Expected: 200 OK and one recorded email
#[tokio::test]
async fn valid_submission_is_forwarded() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let (state, mailer) = app_state(&test);

    let result = submit_contact(State(state), Json(submission())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].subject.contains("Ada Lovelace"));

    Ok(())
}

/// Tests that an invalid submission is rejected with 400 and nothing is
/// sent.
///
/// Expected: 400 Bad Request, zero emails
#[tokio::test]
async fn invalid_submission_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let (state, mailer) = app_state(&test);

    let mut dto = submission();
    dto.email = String::new();

    let result = submit_contact(State(state), Json(dto)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(mailer.sent.lock().unwrap().is_empty());

    Ok(())
}

/// Tests that a relay failure surfaces as an error to the submitter.
///
/// Expected: Err from the handler
#[tokio::test]
async fn relay_failure_surfaces() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let (state, mailer) = app_state(&test);

    *mailer.fail_next.lock().unwrap() = true;

    let result = submit_contact(State(state), Json(submission())).await;

    assert!(result.is_err());

    Ok(())
}
