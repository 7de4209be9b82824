mod app_config;
mod ecoroute_app;
mod error;
mod fetch;
mod score;

pub use app_config::{AppConfig, API_KEY_ENV_VAR};
pub use ecoroute_app::{EcorouteApp, EcorouteOperation};
pub use error::EcorouteAppError;
