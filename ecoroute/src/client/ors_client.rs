use std::time::Duration;

use reqwest::{blocking::Client, header};

use super::DirectionsRequest;
use crate::app::EcorouteAppError;

/// blocking client for the openrouteservice directions API.
pub struct OpenRouteServiceClient {
    endpoint: String,
    api_key: String,
    http: Client,
}

impl OpenRouteServiceClient {
    pub fn new(endpoint: &str, api_key: &str, timeout: Duration) -> Result<Self, EcorouteAppError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            EcorouteAppError::UpstreamFailure(format!("failed to build HTTP client: {e}"))
        })?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// posts a directions request and returns the raw JSON response body.
    /// transport errors and non-success statuses are reported as
    /// [`EcorouteAppError::UpstreamFailure`].
    pub fn fetch_routes(
        &self,
        request: &DirectionsRequest,
    ) -> Result<serde_json::Value, EcorouteAppError> {
        log::info!(
            "requesting directions from {} for {} waypoints, up to {} alternatives",
            self.endpoint,
            request.coordinates.len(),
            request.alternative_routes.target_count
        );
        let response = self
            .http
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, &self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| {
                EcorouteAppError::UpstreamFailure(format!("request to '{}' failed: {e}", self.endpoint))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EcorouteAppError::UpstreamFailure(format!(
                "'{}' responded with status {status}: {body}",
                self.endpoint
            )));
        }
        response.json::<serde_json::Value>().map_err(|e| {
            EcorouteAppError::UpstreamFailure(format!(
                "response from '{}' is not valid JSON: {e}",
                self.endpoint
            ))
        })
    }
}
