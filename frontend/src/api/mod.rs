//! HTTP client for the registration collector.
//!
//! Both operations talk to the single [`DATA_ENDPOINT`]: submissions are
//! posted as JSON, records are fetched with GET (optionally filtered by
//! email). Every response is the `{ Status, Message, Data }` envelope; a
//! `Status: false` body is surfaced as [`ApiError::Rejected`] carrying the
//! server's message.

use gloo_net::http::Request;
use thiserror::Error;

use common::model::record::{SubmissionPayload, SubmissionRecord};
use common::model::response::ApiResponse;

use crate::config::DATA_ENDPOINT;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("{0}")]
    Rejected(String),
    #[error("unexpected response from the server")]
    BadResponse,
    #[error("no registration found for {0}")]
    NotFound(String),
}

/// Posts a finalized submission. Returns the server's message, if any.
pub async fn submit_registration(payload: &SubmissionPayload) -> Result<Option<String>, ApiError> {
    let response = Request::post(DATA_ENDPOINT).json(payload)?.send().await?;
    if !response.ok() {
        return Err(ApiError::Rejected(format!(
            "server returned {}",
            response.status()
        )));
    }

    let envelope: ApiResponse<serde_json::Value> = response.json().await?;
    if envelope.status {
        Ok(envelope.message)
    } else {
        Err(rejected(envelope.message))
    }
}

/// Fetches every stored registration, in the collector's order.
pub async fn fetch_registrations() -> Result<Vec<SubmissionRecord>, ApiError> {
    let response = Request::get(DATA_ENDPOINT).send().await?;
    if !response.ok() {
        return Err(ApiError::Rejected(format!(
            "server returned {}",
            response.status()
        )));
    }

    let envelope: ApiResponse<Vec<SubmissionRecord>> = response.json().await?;
    if envelope.status {
        envelope.data.ok_or(ApiError::BadResponse)
    } else {
        Err(rejected(envelope.message))
    }
}

/// Fetches one registration by email, for the detail view.
pub async fn fetch_registration(email: &str) -> Result<SubmissionRecord, ApiError> {
    let response = Request::get(DATA_ENDPOINT)
        .query([("Email_ID", email)])
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Rejected(format!(
            "server returned {}",
            response.status()
        )));
    }

    let envelope: ApiResponse<Vec<SubmissionRecord>> = response.json().await?;
    if envelope.status {
        single_record(envelope.data, email)
    } else {
        Err(rejected(envelope.message))
    }
}

/// The filtered query still answers with a list; the first entry wins.
/// An empty list means the email is unknown, not a malformed body.
fn single_record(
    data: Option<Vec<SubmissionRecord>>,
    email: &str,
) -> Result<SubmissionRecord, ApiError> {
    let records = data.ok_or(ApiError::BadResponse)?;
    records
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::NotFound(email.to_string()))
}

fn rejected(message: Option<String>) -> ApiError {
    ApiError::Rejected(message.unwrap_or_else(|| "request rejected by the server".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_is_a_bad_response() {
        let result = single_record(None, "asha@example.com");
        assert!(matches!(result, Err(ApiError::BadResponse)));
    }

    #[test]
    fn empty_result_names_the_missing_email() {
        let err = single_record(Some(Vec::new()), "asha@example.com").unwrap_err();
        assert_eq!(err.to_string(), "no registration found for asha@example.com");
    }

    #[test]
    fn first_record_wins() {
        let first = SubmissionRecord {
            email_id: Some("asha@example.com".to_string()),
            ..SubmissionRecord::default()
        };
        let records = vec![first.clone(), SubmissionRecord::default()];

        let record = single_record(Some(records), "asha@example.com").unwrap();
        assert_eq!(record, first);
    }
}
