use std::{path::Path, time::Duration};

use ecoroute_core::model::{pipeline, provider::RawRouteResponse};

use crate::{
    app::{score, AppConfig, EcorouteAppError},
    client::OpenRouteServiceClient,
    util,
};

pub const RAW_RESPONSE_FILENAME: &str = "response.json";

/// requests routes from the provider, optionally stores the raw response and
/// then ranks and reports them. nothing is ranked if the call fails.
pub fn run(
    config: &AppConfig,
    output_directory: Option<&Path>,
    store_raw: bool,
) -> Result<(), EcorouteAppError> {
    let request = config.directions_request()?;
    let request_config = config.request_config()?;
    let client = OpenRouteServiceClient::new(
        &request_config.endpoint,
        config.api_key()?,
        Duration::from_secs(request_config.timeout),
    )?;
    let response = client.fetch_routes(&request)?;

    if store_raw {
        if let Some(outdir) = output_directory {
            util::fs::write_json(&response, outdir, RAW_RESPONSE_FILENAME)?;
        }
    }

    let raw = RawRouteResponse::from_json_value(response)?;
    log::info!("received {} routes from {}", raw.routes.len(), client.endpoint());
    if raw.routes.is_empty() {
        log::warn!("routing provider returned no routes, nothing to rank");
    }
    let ranking = pipeline::score_routes(&raw, &config.scoring)?;
    score::publish(client.endpoint(), config, ranking, output_directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::app_config::RequestConfig;
    use crate::client::{test_server, AlternativeRoutes};
    use crate::report::REPORT_FILENAME;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("ecoroute-fetch-test-{}", std::process::id()))
            .join(name)
    }

    fn config(endpoint: &str) -> AppConfig {
        AppConfig {
            request: Some(RequestConfig {
                endpoint: endpoint.to_string(),
                coordinates: vec![[77.27, 11.49], [78.15, 11.65]],
                alternative_routes: AlternativeRoutes::default(),
                timeout: 5,
            }),
            api_key: Some(String::from("key")),
            ..Default::default()
        }
    }

    #[test]
    fn test_upstream_failure_writes_nothing() {
        let dir = scratch_dir("failure");
        let conf = config("http://127.0.0.1:1/v2/directions/driving-car");
        let result = run(&conf, Some(&dir), true);
        assert!(matches!(result, Err(EcorouteAppError::UpstreamFailure(_))));
        assert!(!dir.join(RAW_RESPONSE_FILENAME).exists());
        assert!(!dir.join(REPORT_FILENAME).exists());
    }

    #[test]
    fn test_error_status_writes_nothing() {
        let dir = scratch_dir("status");
        let (endpoint, handle) = test_server::serve_once("403 Forbidden", r#"{"error": "denied"}"#);
        let result = run(&config(&endpoint), Some(&dir), true);
        let _ = handle.join();
        assert!(matches!(result, Err(EcorouteAppError::UpstreamFailure(_))));
        assert!(!dir.join(RAW_RESPONSE_FILENAME).exists());
        assert!(!dir.join(REPORT_FILENAME).exists());
    }

    #[test]
    fn test_fetch_stores_raw_response_and_report() {
        let dir = scratch_dir("success");
        let body = r#"{"routes": [
            {"summary": {"distance": 10000, "duration": 600}, "geometry": "a"},
            {"summary": {"distance": 8000, "duration": 1200}, "geometry": "b"}
        ]}"#;
        let (endpoint, handle) = test_server::serve_once("200 OK", body);
        run(&config(&endpoint), Some(&dir), true).expect("should fetch and score");
        let _ = handle.join();

        let raw: serde_json::Value =
            util::fs::read_json(&dir.join(RAW_RESPONSE_FILENAME)).expect("raw response should exist");
        assert_eq!(raw["routes"].as_array().map(|a| a.len()), Some(2));
        let report: serde_json::Value =
            util::fs::read_json(&dir.join(REPORT_FILENAME)).expect("report should exist");
        assert_eq!(report["source"]["origin"], serde_json::json!(endpoint));
        assert_eq!(report["ranking"]["cheapest"]["route_id"], serde_json::json!(0));
        assert_eq!(report["ranking"]["greenest"]["route_id"], serde_json::json!(1));
        let _ = std::fs::remove_dir_all(dir);
    }
}
