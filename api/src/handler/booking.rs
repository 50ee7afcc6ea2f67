use crate::{
    extractor::{AppJson, BookingOwner},
    model::booking::{
        AvailabilityQuery, AvailabilityResponse, CreateBookingRequest, CreatedBookingResponse,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;
use kernel::admission::{self, BookingAttempt};
use kernel::availability::compute_availability;
use kernel::model::id::VenueId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn get_availability(
    Path(venue_id): Path<VenueId>,
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AvailabilityResponse>> {
    // Venue resolution comes first: an unknown venue is 404 even when the
    // date parameter is also bad.
    let venue = registry
        .venue_repository()
        .find_by_id(venue_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("venue {venue_id} not found")))?;

    let date = query
        .date
        .as_deref()
        .and_then(admission::parse_date)
        .ok_or(AppError::InvalidDateParameter)?;

    let existing = registry
        .booking_repository()
        .find_by_venue_and_date(venue_id, date)
        .await?;

    let availability = compute_availability(&venue, date, &existing);
    Ok(Json(AvailabilityResponse::new(venue_id, date, availability)))
}

pub async fn create_booking(
    owner: BookingOwner,
    Path(venue_id): Path<VenueId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let venue = registry
        .venue_repository()
        .find_by_id(venue_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("venue {venue_id} not found")))?;

    // "Today" is the local calendar date; bookings carry no timezone.
    let today = Local::now().date_naive();
    let attempt = BookingAttempt::from(req);
    let event = admission::admit(&venue, owner.id(), &attempt, today)?;

    let booking_id = registry.booking_repository().create(event).await?;
    let booking = registry.booking_repository().find_by_id(booking_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedBookingResponse::from(booking)),
    ))
}
