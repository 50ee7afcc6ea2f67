use crate::model::id::VenueId;

/// Operating configuration and presentation data for a bookable venue.
/// Venue CRUD lives in an external service; the booking core only reads
/// these records.
#[derive(Debug, Clone)]
pub struct Venue {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub city: String,
    pub image_url: String,
    pub open_hour: i32,
    pub close_hour: i32,
    pub hourly_price: i32,
}
