use crate::model::{
    booking::{interval::Interval, Booking},
    venue::Venue,
};
use chrono::{NaiveDate, NaiveTime};

/// Free/booked classification of a venue's probe grid for one date.
#[derive(Debug)]
pub struct Availability {
    pub available_starts: Vec<NaiveTime>,
    pub booked_slots: Vec<BookedSlot>,
    pub is_fully_booked: bool,
}

/// An existing booking as reported to clients: the exact reserved range,
/// which may span several probe cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedSlot {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_hours: i32,
}

impl From<&Booking> for BookedSlot {
    fn from(value: &Booking) -> Self {
        Self {
            start_time: value.start_time,
            end_time: value.end_time,
            duration_hours: value.duration_hours,
        }
    }
}

/// Probes each whole hour in `open_hour..close_hour` with a 1-hour
/// interval and marks it free iff it overlaps no existing booking.
///
/// The grid deliberately answers "can a 1-hour booking start here", not
/// whether an arbitrary duration fits; admission re-validates the exact
/// requested interval and remains the source of truth.
pub fn compute_availability(venue: &Venue, date: NaiveDate, existing: &[Booking]) -> Availability {
    let mut available_starts = Vec::new();

    for hour in venue.open_hour..venue.close_hour {
        let Some(start) = u32::try_from(hour)
            .ok()
            .and_then(|h| NaiveTime::from_hms_opt(h, 0, 0))
        else {
            continue;
        };

        let probe = Interval::from_start(date, start, 1);
        let conflict = existing
            .iter()
            .any(|booking| probe.overlaps(&booking.interval()));
        if !conflict && probe.end > probe.start {
            available_starts.push(start);
        }
    }

    let mut booked_slots: Vec<BookedSlot> = existing.iter().map(BookedSlot::from).collect();
    booked_slots.sort_by_key(|slot| slot.start_time);

    Availability {
        is_fully_booked: available_starts.is_empty(),
        available_starts,
        booked_slots,
    }
}
