use chrono::{NaiveDate, NaiveTime};
use kernel::admission::BookingAttempt;
use kernel::availability::{Availability, BookedSlot};
use kernel::model::{
    booking::Booking,
    id::{BookingId, VenueId},
};
use serde::{Deserialize, Serialize};

// Wire keys on this interface are fixed snake_case names; no renaming.

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub duration_hours: Option<i64>,
}

impl From<CreateBookingRequest> for BookingAttempt {
    fn from(value: CreateBookingRequest) -> Self {
        let CreateBookingRequest {
            date,
            start_time,
            duration_hours,
        } = value;
        BookingAttempt {
            date,
            start_time,
            duration_hours,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub venue_id: VenueId,
    pub date: String,
    pub available_start_times: Vec<String>,
    pub booked_slots: Vec<BookedSlotResponse>,
    pub is_fully_booked: bool,
}

impl AvailabilityResponse {
    pub fn new(venue_id: VenueId, date: NaiveDate, availability: Availability) -> Self {
        let Availability {
            available_starts,
            booked_slots,
            is_fully_booked,
        } = availability;
        Self {
            venue_id,
            date: date.to_string(),
            available_start_times: available_starts.iter().map(format_time).collect(),
            booked_slots: booked_slots
                .into_iter()
                .map(BookedSlotResponse::from)
                .collect(),
            is_fully_booked,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookedSlotResponse {
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: i32,
}

impl From<BookedSlot> for BookedSlotResponse {
    fn from(value: BookedSlot) -> Self {
        let BookedSlot {
            start_time,
            end_time,
            duration_hours,
        } = value;
        Self {
            start_time: format_time(&start_time),
            end_time: format_time(&end_time),
            duration_hours,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedBookingResponse {
    pub message: String,
    pub booking: BookingResponse,
}

impl From<Booking> for CreatedBookingResponse {
    fn from(value: Booking) -> Self {
        Self {
            message: "Booking confirmed!".into(),
            booking: BookingResponse::from(value),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: BookingId,
    pub venue: String,
    pub venue_id: VenueId,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: i32,
    pub total_price: i64,
    pub image_url: String,
    pub city: String,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let total_price = value.total_price();
        let Booking {
            booking_id,
            booked_by: _,
            date,
            start_time,
            end_time,
            duration_hours,
            venue,
        } = value;
        Self {
            id: booking_id,
            venue: venue.venue_name,
            venue_id: venue.venue_id,
            date: date.to_string(),
            start_time: format_time(&start_time),
            end_time: format_time(&end_time),
            duration_hours,
            total_price,
            image_url: venue.image_url,
            city: venue.city,
        }
    }
}

fn format_time(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
