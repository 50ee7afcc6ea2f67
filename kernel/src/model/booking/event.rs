use crate::model::id::{OwnerId, VenueId};
use chrono::{NaiveDate, NaiveTime};
use derive_new::new;

/// A fully validated booking request, produced only by
/// `admission::admit`. `end_time` is already derived from
/// `start_time + duration_hours`.
#[derive(Debug, new)]
pub struct CreateBooking {
    pub venue_id: VenueId,
    pub booked_by: OwnerId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_hours: i32,
}
