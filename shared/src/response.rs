//! Turning raw HTTP responses from the billing API into tagged outcomes.
//!
//! The server reports semantic failures either with a non-2xx status or with a
//! `{"error": "..."}` body (sometimes under a 200). Both become
//! [`ApiOutcome::Rejected`]; only an unreadable body is an [`ApiError`].

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Result of a request that reached the server
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Accepted(T),
    Rejected(String),
}

impl<T> ApiOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Accepted(value) => ApiOutcome::Accepted(f(value)),
            ApiOutcome::Rejected(message) => ApiOutcome::Rejected(message),
        }
    }
}

/// Rows returned by a listing endpoint. An empty answer is its own state.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Found(Vec<T>),
    Empty,
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Listing::Empty
        } else {
            Listing::Found(rows)
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn status_message(status: u16) -> String {
    format!("Server returned status {}", status)
}

/// Decode a response body into `T`, folding server-side errors into `Rejected`
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<ApiOutcome<T>, ApiError> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if is_success(status) => return Err(ApiError::Decode(e.to_string())),
        Err(_) => {
            let text = body.trim();
            let message = if text.is_empty() {
                status_message(status)
            } else {
                text.to_string()
            };
            return Ok(ApiOutcome::Rejected(message));
        }
    };

    if let Some(error) = value.as_object().and_then(|obj| obj.get("error")) {
        let message = match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        };
        return Ok(ApiOutcome::Rejected(message));
    }

    if !is_success(status) {
        return Ok(ApiOutcome::Rejected(status_message(status)));
    }

    serde_json::from_value(value)
        .map(ApiOutcome::Accepted)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a JSON array response into a [`Listing`]
pub fn decode_listing<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<ApiOutcome<Listing<T>>, ApiError> {
    Ok(decode_response::<Vec<T>>(status, body)?.map(Listing::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PendingBill, ServiceType};
    use serde_json::json;

    #[test]
    fn test_created_record_is_accepted() {
        let body = json!({"clientId": 100, "serviceType": "Water", "status": "pending"}).to_string();
        let outcome = decode_response::<Value>(201, &body).unwrap();

        assert!(matches!(outcome, ApiOutcome::Accepted(_)));
    }

    #[test]
    fn test_error_key_is_rejected_even_with_success_status() {
        let outcome = decode_response::<Value>(200, r#"{"error":"Bill already exists"}"#).unwrap();
        assert_eq!(outcome, ApiOutcome::Rejected("Bill already exists".to_string()));

        let outcome = decode_response::<Value>(400, r#"{"error":{"code":42}}"#).unwrap();
        assert_eq!(outcome, ApiOutcome::Rejected(r#"{"code":42}"#.to_string()));
    }

    #[test]
    fn test_non_success_status_without_error_key() {
        let outcome = decode_response::<Value>(500, "{}").unwrap();
        assert_eq!(outcome, ApiOutcome::Rejected("Server returned status 500".to_string()));

        let outcome = decode_response::<Value>(502, "Bad Gateway").unwrap();
        assert_eq!(outcome, ApiOutcome::Rejected("Bad Gateway".to_string()));

        let outcome = decode_response::<Value>(404, "").unwrap();
        assert_eq!(outcome, ApiOutcome::Rejected("Server returned status 404".to_string()));
    }

    #[test]
    fn test_unreadable_success_body_is_decode_error() {
        assert!(matches!(
            decode_response::<Value>(200, "<html>"),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            decode_listing::<PendingBill>(200, r#"{"bills": []}"#),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_listing_distinguishes_empty_from_found() {
        let empty = decode_listing::<PendingBill>(200, "[]").unwrap();
        assert_eq!(empty, ApiOutcome::Accepted(Listing::Empty));

        let body = json!([{
            "clientId": 300,
            "serviceType": "Sewer",
            "billingPeriod": "202502",
            "amount": 18.75,
            "status": "pending"
        }])
        .to_string();

        match decode_listing::<PendingBill>(200, &body).unwrap() {
            ApiOutcome::Accepted(Listing::Found(rows)) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].service_type, ServiceType::Sewer);
                assert_eq!(rows[0].amount, 18.75);
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_listing_error_payload_is_rejected() {
        let outcome = decode_listing::<PendingBill>(404, r#"{"error":"Client not found"}"#).unwrap();
        assert_eq!(outcome, ApiOutcome::Rejected("Client not found".to_string()));
    }
}
