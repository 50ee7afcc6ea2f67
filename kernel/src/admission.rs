use crate::model::{
    booking::{event::CreateBooking, interval::Interval, MAX_DURATION_HOURS},
    id::OwnerId,
    venue::Venue,
};
use chrono::{NaiveDate, NaiveTime, Timelike};
use shared::error::{AppError, AppResult};

/// Raw booking request fields. Each field stays optional so the checks
/// below own the rejection ordering instead of a deserializer deciding it.
#[derive(Debug, Default)]
pub struct BookingAttempt {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub duration_hours: Option<i64>,
}

/// Validates a booking attempt against the venue's operating window and
/// turns it into a `CreateBooking` event. Checks run in a fixed order and
/// short-circuit, so an identical attempt always fails with the same
/// rejection.
///
/// The overlap check against persisted bookings is not done here; the
/// repository re-checks it inside the same transaction as the insert.
pub fn admit(
    venue: &Venue,
    booked_by: OwnerId,
    attempt: &BookingAttempt,
    today: NaiveDate,
) -> AppResult<CreateBooking> {
    let date = attempt.date.as_deref().and_then(parse_date);
    let start_time = attempt.start_time.as_deref().and_then(parse_time);

    let (Some(date), Some(start_time), Some(duration_hours)) =
        (date, start_time, attempt.duration_hours)
    else {
        return Err(AppError::MalformedInput("Missing required fields.".into()));
    };

    if !(1..=MAX_DURATION_HOURS).contains(&duration_hours) {
        return Err(AppError::DurationOutOfRange);
    }
    let duration_hours = duration_hours as i32;

    if date < today {
        return Err(AppError::PastDate);
    }

    if start_time.minute() != 0 {
        return Err(AppError::MisalignedStartTime);
    }

    let start_hour = start_time.hour() as i32;
    if start_hour < venue.open_hour || start_hour >= venue.close_hour {
        return Err(AppError::OutsideOperatingHours);
    }

    let interval = Interval::from_start(date, start_time, duration_hours);
    if interval.end <= interval.start || interval.end.hour() as i32 > venue.close_hour {
        return Err(AppError::DurationExceedsHours);
    }

    Ok(CreateBooking::new(
        venue.venue_id,
        booked_by,
        date,
        start_time,
        interval.end,
        duration_hours,
    ))
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}
