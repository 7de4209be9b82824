use ecoroute_core::model::estimate::ScoringConfig;
use ecoroute_core::model::ranking::RouteRanking;
use serde::{Deserialize, Serialize};

pub const REPORT_FILENAME: &str = "route_report.json";

/// ranked routes along with how they were produced.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RouteReport {
    /// information describing how this report was generated
    pub source: ReportSource,
    pub ranking: RouteRanking,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub struct ReportSource {
    /// provider endpoint or local file path the routes came from
    pub origin: String,
    /// date and time this report was created
    pub created: String,
    /// constants used to estimate and score the routes
    pub scoring: ScoringConfig,
}

impl ReportSource {
    pub fn new(origin: &str, scoring: &ScoringConfig) -> Self {
        let created = chrono::Utc::now().to_rfc3339();
        Self {
            origin: origin.to_string(),
            created,
            scoring: scoring.clone(),
        }
    }
}

impl RouteReport {
    pub fn new(origin: &str, scoring: &ScoringConfig, ranking: RouteRanking) -> Self {
        Self {
            source: ReportSource::new(origin, scoring),
            ranking,
        }
    }
}
