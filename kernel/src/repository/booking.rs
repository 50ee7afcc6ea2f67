use crate::model::{
    booking::{event::CreateBooking, Booking},
    id::{BookingId, VenueId},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persists a validated booking, re-checking overlap and the insert
    /// inside one serialized unit so concurrent admissions for the same
    /// venue and date cannot both commit overlapping intervals.
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Booking>;
    /// All bookings for one venue on one date, ordered by start time.
    async fn find_by_venue_and_date(
        &self,
        venue_id: VenueId,
        date: NaiveDate,
    ) -> AppResult<Vec<Booking>>;
}
