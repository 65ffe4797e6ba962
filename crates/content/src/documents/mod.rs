pub mod cached_response;
pub mod poi_content;
pub mod trip_collaboration;

pub use cached_response::CachedApiResponse;
pub use poi_content::{GeoPoint, PoiContent};
pub use trip_collaboration::TripCollaboration;
