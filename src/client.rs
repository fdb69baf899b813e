use dotenv::dotenv;
use reqwest::Client;
use serde_json::Value;
use std::env;
use tracing::{debug, info};

use crate::error::SubmitError;
use crate::models::ScheduleRequest;

/// Client for the CRISP scheduling service
pub struct SchedulingClient {
    client: Client,
    endpoint: String,
}

impl SchedulingClient {
    /// Create a new scheduling client from environment variables
    pub fn new() -> Self {
        dotenv().ok();

        Self {
            client: Client::new(),
            endpoint: env::var("SCHEDULE_API_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        }
    }

    /// Create a client against an explicit endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a schedule generation request and return the raw result.
    ///
    /// Any non-2xx status is a transport failure whose message carries the
    /// numeric status code; a 2xx body that is not valid JSON is a protocol
    /// failure. The result payload is returned unparsed so the renderer can
    /// project it tolerantly.
    pub async fn generate_schedule(&self, request: &ScheduleRequest) -> Result<Value, SubmitError> {
        let url = format!("{}/api/schedule/generate", self.endpoint);

        info!("Sending schedule generation request");
        debug!("API URL: {}", url);
        debug!(
            "Request window: {}-{}",
            request.time_slot.start_time, request.time_slot.end_time
        );

        let res = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| SubmitError::Transport(format!("request failed: {}", err)))?;

        let status = res.status();
        info!("Response received with status: {}", status);

        if !status.is_success() {
            return Err(SubmitError::Transport(format!(
                "HTTP error! status: {}",
                status.as_u16()
            )));
        }

        let body = res
            .text()
            .await
            .map_err(|err| SubmitError::Transport(format!("failed to read response: {}", err)))?;

        serde_json::from_str(&body).map_err(|err| SubmitError::Protocol(err.to_string()))
    }
}

impl Default for SchedulingClient {
    fn default() -> Self {
        Self::new()
    }
}
