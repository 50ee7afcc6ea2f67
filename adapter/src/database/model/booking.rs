use kernel::model::{
    booking::{Booking, BookingVenue},
    id::{BookingId, OwnerId, VenueId},
};
use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;

/// A booking joined with the venue columns the response needs.
#[derive(FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub venue_id: VenueId,
    pub owner_id: OwnerId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_hours: i32,
    pub venue_name: String,
    pub city: String,
    pub image_url: String,
    pub hourly_price: i32,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            venue_id,
            owner_id,
            date,
            start_time,
            end_time,
            duration_hours,
            venue_name,
            city,
            image_url,
            hourly_price,
        } = value;
        Booking {
            booking_id,
            booked_by: owner_id,
            date,
            start_time,
            end_time,
            duration_hours,
            venue: BookingVenue {
                venue_id,
                venue_name,
                city,
                image_url,
                hourly_price,
            },
        }
    }
}
