pub mod normalize_ops;
pub mod ranking_ops;

mod route_ranking;
mod scored_route;

pub use route_ranking::RouteRanking;
pub use scored_route::ScoredRoute;
