mod raw_route;
mod step_type;

pub use raw_route::{RawRoute, RawRouteResponse, RawSegment, RawStep, RawSummary};
pub use step_type::StepTypeCode;
