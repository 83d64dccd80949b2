//! Submission of a transport reservation to the external workflow webhook.
//!
//! This is network glue at the edge of the crate, deliberately separate from
//! the layout engine: one JSON payload, one POST, no retries. The webhook's
//! reply is decided into a [WebhookReply] exactly once, at this boundary —
//! a body that parses as JSON is [WebhookReply::Parsed], anything else is
//! carried verbatim as [WebhookReply::RawText].

use crate::error::AwbError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tag identifying the booking dashboard as the origin of every payload
pub const SOURCE_TAG: &str = "booking-dashboard";

/// Cargo descriptor the workflow expects on every reservation
pub const AIRLINE_TAG: &str = "HUM";

/// A reservation as captured by the intake form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub passenger_name: String,
    /// IATA code of the departure airport
    pub departure: String,
    /// IATA code of the destination airport
    pub destination: String,
    pub requested_flight: String,
    pub departure_date: String,
}

impl ReservationRequest {
    /// The fields the workflow refuses to run without
    fn validate(&self) -> Result<(), AwbError> {
        if self.passenger_name.trim().is_empty() {
            return Err(AwbError::InvalidRecord("passenger_name"));
        }
        if self.departure.trim().is_empty() {
            return Err(AwbError::InvalidRecord("departure"));
        }
        if self.destination.trim().is_empty() {
            return Err(AwbError::InvalidRecord("destination"));
        }
        Ok(())
    }
}

/// The wire shape of a submission: the request fields plus the timestamp and
/// the fixed source/airline tags
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookPayload<'a> {
    passenger_name: &'a str,
    departure: &'a str,
    destination: &'a str,
    requested_flight: &'a str,
    departure_date: &'a str,
    timestamp: String,
    source: &'static str,
    airline: &'static str,
}

/// What the webhook answered with
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookReply {
    /// The response body parsed as JSON
    Parsed(serde_json::Value),
    /// The response body, carried verbatim, when it was not JSON
    RawText(String),
}

impl WebhookReply {
    pub fn from_body(body: String) -> WebhookReply {
        match serde_json::from_str(&body) {
            Ok(value) => WebhookReply::Parsed(value),
            Err(_) => WebhookReply::RawText(body),
        }
    }
}

/// A handle on the fixed webhook endpoint
#[derive(Debug, Clone)]
pub struct ReservationClient {
    endpoint: String,
}

impl ReservationClient {
    pub fn new<S: Into<String>>(endpoint: S) -> ReservationClient {
        ReservationClient {
            endpoint: endpoint.into(),
        }
    }

    /// Submit one reservation. The timestamp is caller-injected so the
    /// payload is reproducible and testable. Transport failures surface as
    /// [AwbError::Webhook]; nothing is retried.
    pub fn submit(
        &self,
        request: &ReservationRequest,
        sent_at: DateTime<Utc>,
    ) -> Result<WebhookReply, AwbError> {
        request.validate()?;

        let payload = WebhookPayload {
            passenger_name: &request.passenger_name,
            departure: &request.departure,
            destination: &request.destination,
            requested_flight: &request.requested_flight,
            departure_date: &request.departure_date,
            timestamp: sent_at.to_rfc3339(),
            source: SOURCE_TAG,
            airline: AIRLINE_TAG,
        };
        let body = serde_json::to_string(&payload)?;

        log::debug!("submitting reservation for {}", request.passenger_name);
        let response = ureq::post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_string(&body)
            .map_err(Box::new)?;

        let text = response.into_string()?;
        Ok(WebhookReply::from_body(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_is_decided_once_at_the_boundary() {
        let reply = WebhookReply::from_body(r#"{"status":"queued"}"#.to_string());
        assert_eq!(
            reply,
            WebhookReply::Parsed(serde_json::json!({"status": "queued"}))
        );

        let reply = WebhookReply::from_body("Accepted".to_string());
        assert_eq!(reply, WebhookReply::RawText("Accepted".to_string()));
    }

    #[test]
    fn request_serializes_in_camel_case() {
        let request = ReservationRequest {
            passenger_name: "J. Martin".to_string(),
            departure: "ORY".to_string(),
            destination: "ALG".to_string(),
            requested_flight: "AH1007".to_string(),
            departure_date: "2024-03-18".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["passengerName"], "J. Martin");
        assert_eq!(json["requestedFlight"], "AH1007");
    }

    #[test]
    fn submission_requires_the_core_fields() {
        let client = ReservationClient::new("http://127.0.0.1:9/webhook");
        let request = ReservationRequest {
            departure: "ORY".to_string(),
            destination: "ALG".to_string(),
            ..Default::default()
        };
        // validation fails before any network traffic happens
        let err = client.submit(&request, Utc::now()).unwrap_err();
        assert!(matches!(err, AwbError::InvalidRecord("passenger_name")));
    }
}
