use std::io::Write;

use ecoroute_core::model::ranking::{RouteRanking, ScoredRoute};

use crate::app::EcorouteAppError;

/// writes every route followed by the three selections as pretty JSON.
pub fn print_ranking<W: Write>(ranking: &RouteRanking, out: &mut W) -> Result<(), EcorouteAppError> {
    write_section(out, "ALL ROUTES", &ranking.routes)?;
    write_section(out, "CHEAPEST ROUTE", std::slice::from_ref(&ranking.cheapest))?;
    write_section(out, "GREENEST ROUTE", std::slice::from_ref(&ranking.greenest))?;
    write_section(
        out,
        "BEST BALANCED ROUTE",
        std::slice::from_ref(&ranking.best_balanced),
    )
}

fn write_section<W: Write>(
    out: &mut W,
    title: &str,
    routes: &[ScoredRoute],
) -> Result<(), EcorouteAppError> {
    let io_err = |e: std::io::Error| EcorouteAppError::SerializationError(e.to_string());
    writeln!(out, "\n{title}:").map_err(io_err)?;
    for route in routes {
        let json = serde_json::to_string_pretty(route)
            .map_err(|e| EcorouteAppError::SerializationError(e.to_string()))?;
        writeln!(out, "{json}").map_err(io_err)?;
    }
    Ok(())
}
