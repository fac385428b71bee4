//! HTTP lookup against the remote metadata service.
//!
//! One GET per target number, never retried. Every outcome other than a 200
//! carrying a JSON object is folded into [`LookupResult::Failure`] with a
//! user-facing reason, so callers never handle transport errors themselves.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{LookupResult, Payload, TargetNumber, display_value};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;

/// Failure reason for a body that is not a JSON object
pub const INVALID_RESPONSE: &str = "invalid response format";

/// Failure reason when the request exceeds its timeout
pub const TIMEOUT_FAILURE: &str = "request timeout - server response delayed";

/// Failure reason when no connection could be established
pub const CONNECTION_FAILURE: &str = "connection failure - network unavailable";

/// Anything that can answer a lookup for a validated number
///
/// The session is written against this trait so it can be driven by the real
/// HTTP client or by a stand-in.
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Perform exactly one lookup for `number`
    async fn lookup(&self, number: &TargetNumber) -> LookupResult;
}

/// HTTP client for the lookup service
///
/// Owns its own `reqwest::Client` with the timeout and static headers baked in.
pub struct LookupClient {
    /// HTTP client with default headers and timeout applied
    http_client: reqwest::Client,

    /// Lookup endpoint
    endpoint: url::Url,

    /// Query parameter carrying the number
    query_param: String,
}

impl LookupClient {
    /// Create a client from configuration
    ///
    /// # Errors
    /// Returns error if the endpoint is not a valid URL or the HTTP client
    /// cannot be created
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = url::Url::parse(&config.endpoint)
            .map_err(|e| Error::config("endpoint", format!("invalid endpoint URL: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint,
            query_param: config.query_param.clone(),
        })
    }

    /// The endpoint requests are sent to
    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    /// Fetch metadata for one number
    pub async fn fetch(&self, number: &TargetNumber) -> LookupResult {
        debug!(number = %number, url = %self.endpoint, "sending lookup request");

        let response = match self
            .http_client
            .get(self.endpoint.clone())
            .query(&[(self.query_param.as_str(), number.as_str())])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return transport_failure(&e),
        };

        let status = response.status();
        if status != StatusCode::OK {
            debug!(number = %number, status = status.as_u16(), "lookup service returned non-200");
            return LookupResult::Failure(format!("API RESPONSE: HTTP {}", status.as_u16()));
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return transport_failure(&e),
        };

        debug!(number = %number, bytes = body.len(), "lookup response received");
        parse_payload(&body)
    }
}

#[async_trait]
impl LookupService for LookupClient {
    async fn lookup(&self, number: &TargetNumber) -> LookupResult {
        self.fetch(number).await
    }
}

/// Interpret a 200 response body
///
/// A JSON object becomes the payload, unless it carries an `error` key, in
/// which case the service is reporting a failure in-band.
pub fn parse_payload(body: &[u8]) -> LookupResult {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => {
            if let Some(reason) = fields.get("error") {
                return LookupResult::Failure(display_value(reason));
            }
            LookupResult::Success(Payload::new(fields))
        }
        Ok(other) => {
            debug!(kind = json_kind(&other), "lookup response is not a JSON object");
            LookupResult::failure(INVALID_RESPONSE)
        }
        Err(e) => {
            debug!(error = %e, "lookup response is not valid JSON");
            LookupResult::failure(INVALID_RESPONSE)
        }
    }
}

fn transport_failure(e: &reqwest::Error) -> LookupResult {
    debug!(error = %e, "lookup request failed");
    if e.is_timeout() {
        LookupResult::failure(TIMEOUT_FAILURE)
    } else if e.is_connect() {
        LookupResult::failure(CONNECTION_FAILURE)
    } else {
        LookupResult::Failure(format!("network error: {}", e))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests;
