use crate::model::booking::interval::{total_price, Interval};
use crate::model::id::{BookingId, OwnerId, VenueId};
use chrono::{NaiveDate, NaiveTime};

pub mod event;
pub mod interval;

pub const MAX_DURATION_HOURS: i64 = 8;

/// A persisted reservation of a venue for `[start_time, end_time)` on one
/// calendar date. Immutable once created; `end_time` was derived at
/// admission and is never recomputed.
#[derive(Debug)]
pub struct Booking {
    pub booking_id: BookingId,
    pub booked_by: OwnerId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_hours: i32,
    pub venue: BookingVenue,
}

impl Booking {
    pub fn interval(&self) -> Interval {
        Interval {
            start: self.start_time,
            end: self.end_time,
        }
    }

    /// Derived, never persisted.
    pub fn total_price(&self) -> i64 {
        total_price(self.duration_hours, self.venue.hourly_price)
    }
}

/// The slice of venue data a booking carries for presentation.
#[derive(Debug)]
pub struct BookingVenue {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub city: String,
    pub image_url: String,
    pub hourly_price: i32,
}
