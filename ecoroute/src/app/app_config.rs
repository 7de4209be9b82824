use std::path::Path;

use config::{Config, Environment, File};
use ecoroute_core::model::estimate::ScoringConfig;
use serde::{Deserialize, Serialize};

use crate::app::EcorouteAppError;
use crate::client::{AlternativeRoutes, DirectionsRequest, DEFAULT_ENDPOINT};

/// environment variable holding the routing provider credential.
pub const API_KEY_ENV_VAR: &str = "ECOROUTE_API_KEY";
const ENV_PREFIX: &str = "ECOROUTE";

/// application configuration, read from a TOML file with `[request]` and
/// `[scoring]` tables. both tables are optional; scoring constants default
/// to the built-in vehicle assumptions.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub request: Option<RequestConfig>,
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// provider credential. normally set through [`API_KEY_ENV_VAR`]; a
    /// top-level `api_key` in the file is also read, and the environment
    /// variable takes precedence over it.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RequestConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub coordinates: Vec<[f64; 2]>,
    #[serde(default)]
    pub alternative_routes: AlternativeRoutes,
    /// seconds before the provider call is abandoned
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_endpoint() -> String {
    String::from(DEFAULT_ENDPOINT)
}

fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// loads configuration from an optional TOML file overlaid with
    /// `ECOROUTE_*` environment variables.
    pub fn load(configuration_file: Option<&Path>) -> Result<AppConfig, EcorouteAppError> {
        let mut builder = Config::builder();
        if let Some(filepath) = configuration_file {
            builder = builder.add_source(File::from(filepath));
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| {
                let msg = format!("configuration produced error: {e}");
                EcorouteAppError::InvalidUserInput(msg)
            })?;
        let app_config: AppConfig = config.try_deserialize().map_err(|e| {
            let msg = format!("failure reading configuration: {e}");
            EcorouteAppError::InvalidUserInput(msg)
        })?;
        app_config.scoring.validate()?;
        Ok(app_config)
    }

    /// the directions request described by the `[request]` table.
    pub fn directions_request(&self) -> Result<DirectionsRequest, EcorouteAppError> {
        let request = self.request_config()?;
        let directions = DirectionsRequest {
            coordinates: request.coordinates.clone(),
            alternative_routes: request.alternative_routes,
        };
        directions.validate()?;
        Ok(directions)
    }

    pub fn request_config(&self) -> Result<&RequestConfig, EcorouteAppError> {
        self.request.as_ref().ok_or_else(|| {
            EcorouteAppError::InvalidUserInput(String::from(
                "configuration is missing the [request] table",
            ))
        })
    }

    pub fn api_key(&self) -> Result<&str, EcorouteAppError> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(EcorouteAppError::InvalidUserInput(format!(
                "routing provider credential not found, set the {API_KEY_ENV_VAR} environment variable"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("ecoroute-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("test invariant failed: cannot create temp dir");
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).expect("test invariant failed: cannot create file");
        file.write_all(contents.as_bytes())
            .expect("test invariant failed: cannot write file");
        path
    }

    #[test]
    fn test_load_full_config() {
        let path = write_config(
            "full.toml",
            r#"
            [request]
            coordinates = [[77.27648723693109, 11.497201492869667], [78.15923629719867, 11.659103262290106]]

            [request.alternative_routes]
            target_count = 2
            share_factor = 0.5

            [scoring]
            fuel_price = 110.0

            [scoring.weights]
            cost = 0.25
            emissions = 0.75
            "#,
        );
        let conf = AppConfig::load(Some(&path)).expect("should load");
        let request = conf.directions_request().expect("should build request");
        assert_eq!(request.coordinates.len(), 2);
        assert_eq!(request.alternative_routes.target_count, 2);
        assert_eq!(request.alternative_routes.share_factor, 0.5);
        let req_conf = conf.request_config().expect("has request");
        assert_eq!(req_conf.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(req_conf.timeout, 30);
        assert_eq!(conf.scoring.fuel_price, 110.0);
        assert_eq!(conf.scoring.mileage, 15.0);
        assert_eq!(conf.scoring.weights.cost, 0.25);
        assert_eq!(conf.scoring.weights.emissions, 0.75);
    }

    #[test]
    fn test_load_repository_configuration() {
        let conf_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .expect("test invariant failed: crate dir has no parent")
            .join("configuration")
            .join("ecoroute.toml");
        let conf = AppConfig::load(Some(&conf_path)).expect("should load");
        let request = conf.directions_request().expect("should build request");
        assert_eq!(request.alternative_routes.target_count, 3);
        assert_eq!(request.alternative_routes.share_factor, 0.6);
        assert_eq!(conf.scoring, ScoringConfig::default());
    }

    #[test]
    fn test_scoring_only_config() {
        let path = write_config("scoring.toml", "[scoring]\nemission_factor = 0.2\n");
        let conf = AppConfig::load(Some(&path)).expect("should load");
        assert_eq!(conf.scoring.emission_factor, 0.2);
        assert!(matches!(
            conf.directions_request(),
            Err(EcorouteAppError::InvalidUserInput(_))
        ));
    }

    #[test]
    fn test_invalid_scoring_config_is_rejected() {
        let path = write_config("bad.toml", "[scoring]\nmileage = 0.0\n");
        let result = AppConfig::load(Some(&path));
        assert!(matches!(result, Err(EcorouteAppError::Scoring(_))));
    }

    #[test]
    fn test_api_key_from_file() {
        let path = write_config("key.toml", "api_key = \"file-key\"\n");
        let conf = AppConfig::load(Some(&path)).expect("should load");
        if std::env::var_os(API_KEY_ENV_VAR).is_none() {
            assert_eq!(conf.api_key().expect("has key"), "file-key");
        }
    }

    #[test]
    fn test_missing_api_key() {
        let conf = AppConfig::default();
        assert!(conf.api_key().is_err());
        let conf = AppConfig {
            api_key: Some(String::from("  ")),
            ..Default::default()
        };
        assert!(conf.api_key().is_err());
    }
}
