use std::path::Path;

use ecoroute_core::model::{pipeline, provider::RawRouteResponse, ranking::RouteRanking};

use crate::{
    app::{AppConfig, EcorouteAppError},
    report::{self, RouteReport, REPORT_FILENAME},
    util,
};

/// ranks routes from a stored provider response.
pub fn run(
    config: &AppConfig,
    response_file: &Path,
    output_directory: Option<&Path>,
) -> Result<(), EcorouteAppError> {
    let value: serde_json::Value = util::fs::read_json(response_file)?;
    let raw = RawRouteResponse::from_json_value(value)?;
    log::info!(
        "read {} routes from '{}'",
        raw.routes.len(),
        response_file.display()
    );
    let ranking = pipeline::score_routes(&raw, &config.scoring)?;
    let origin = response_file.to_string_lossy();
    publish(&origin, config, ranking, output_directory)
}

/// prints a ranking to stdout and writes the route report if an output
/// directory is provided.
pub fn publish(
    origin: &str,
    config: &AppConfig,
    ranking: RouteRanking,
    output_directory: Option<&Path>,
) -> Result<(), EcorouteAppError> {
    let stdout = std::io::stdout();
    report::print_ranking(&ranking, &mut stdout.lock())?;
    if let Some(outdir) = output_directory {
        let route_report = RouteReport::new(origin, &config.scoring, ranking);
        util::fs::write_json(&route_report, outdir, REPORT_FILENAME)?;
    }
    Ok(())
}
