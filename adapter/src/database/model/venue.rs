use kernel::model::{id::VenueId, venue::Venue};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct VenueRow {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub city: String,
    pub image_url: String,
    pub open_hour: i32,
    pub close_hour: i32,
    pub hourly_price: i32,
}

impl From<VenueRow> for Venue {
    fn from(value: VenueRow) -> Self {
        let VenueRow {
            venue_id,
            venue_name,
            city,
            image_url,
            open_hour,
            close_hour,
            hourly_price,
        } = value;
        Venue {
            venue_id,
            venue_name,
            city,
            image_url,
            open_hour,
            close_hour,
            hourly_price,
        }
    }
}
