mod directions_request;
mod ors_client;

#[cfg(test)]
pub(crate) mod test_server;

pub use directions_request::{AlternativeRoutes, DirectionsRequest, DEFAULT_ENDPOINT};
pub use ors_client::OpenRouteServiceClient;
