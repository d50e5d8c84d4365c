use std::future::Future;

use denue_client::{DenueClient, DenueError};
use denue_core::Company;

/// Anything that can answer the two DENUE query shapes.
///
/// [`DenueClient`] is the production implementation; tests substitute an
/// in-memory source.
pub trait EstablishmentSource {
    fn search_by_name(
        &self,
        token: &str,
        keyword: &str,
        region: &str,
    ) -> impl Future<Output = Result<Vec<Company>, DenueError>>;

    fn search_by_radius(
        &self,
        token: &str,
        keyword: &str,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
    ) -> impl Future<Output = Result<Vec<Company>, DenueError>>;
}

impl EstablishmentSource for DenueClient {
    async fn search_by_name(
        &self,
        token: &str,
        keyword: &str,
        region: &str,
    ) -> Result<Vec<Company>, DenueError> {
        DenueClient::search_by_name(self, token, keyword, region).await
    }

    async fn search_by_radius(
        &self,
        token: &str,
        keyword: &str,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
    ) -> Result<Vec<Company>, DenueError> {
        DenueClient::search_by_radius(self, token, keyword, latitude, longitude, radius_meters)
            .await
    }
}
