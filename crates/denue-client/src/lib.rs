pub mod client;
pub mod error;
pub mod normalize;

pub use client::{DenueClient, MAX_RADIUS_METERS, NATIONAL_REGION};
pub use error::DenueError;
pub use normalize::{parse_establishments, SOURCE_BY_NAME, SOURCE_BY_RADIUS};
