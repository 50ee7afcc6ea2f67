use crate::database::{model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{event::CreateBooking, Booking},
    id::{BookingId, VenueId},
};
use kernel::repository::booking::BookingRepository;
use chrono::NaiveDate;
use shared::error::{AppError, AppResult};
use uuid::Uuid;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // The overlap re-check and the insert must not interleave with a
        // concurrent admission for the same venue and date, so both run
        // inside one SERIALIZABLE transaction.
        self.set_transaction_serializable(&mut tx).await?;

        let overlap = sqlx::query_scalar::<_, Uuid>(
            r#"
                SELECT booking_id
                FROM bookings
                WHERE venue_id = $1
                  AND date = $2
                  AND start_time < $4
                  AND $3 < end_time
                LIMIT 1
            "#,
        )
        .bind(event.venue_id)
        .bind(event.date)
        .bind(event.start_time)
        .bind(event.end_time)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if overlap.is_some() {
            return Err(AppError::SlotTaken);
        }

        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, venue_id, owner_id, date,
                start_time, end_time, duration_hours)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(booking_id)
        .bind(event.venue_id)
        .bind(event.booked_by)
        .bind(event.date)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.duration_hours)
        .execute(&mut *tx)
        .await
        .map_err(|e| match e.as_database_error() {
            // A concurrent request won the race for the exact same start
            // time; the (venue_id, date, start_time) constraint is the
            // final arbiter.
            Some(db_err) if db_err.is_unique_violation() => AppError::SlotTaken,
            _ => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                b.booking_id,
                b.venue_id,
                b.owner_id,
                b.date,
                b.start_time,
                b.end_time,
                b.duration_hours,
                v.venue_name,
                v.city,
                v.image_url,
                v.hourly_price
                FROM bookings AS b
                INNER JOIN venues AS v ON b.venue_id = v.venue_id
                WHERE b.booking_id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::from)
            .ok_or_else(|| AppError::EntityNotFound(format!("booking {booking_id} not found")))
    }

    async fn find_by_venue_and_date(
        &self,
        venue_id: VenueId,
        date: NaiveDate,
    ) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                b.booking_id,
                b.venue_id,
                b.owner_id,
                b.date,
                b.start_time,
                b.end_time,
                b.duration_hours,
                v.venue_name,
                v.city,
                v.image_url,
                v.hourly_price
                FROM bookings AS b
                INNER JOIN venues AS v ON b.venue_id = v.venue_id
                WHERE b.venue_id = $1 AND b.date = $2
                ORDER BY b.start_time ASC
            "#,
        )
        .bind(venue_id)
        .bind(date)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}

impl BookingRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use kernel::model::id::OwnerId;
    use std::sync::Arc;

    async fn seed_owner(pool: &sqlx::PgPool) -> anyhow::Result<OwnerId> {
        let owner_id = OwnerId::new();
        sqlx::query("INSERT INTO profiles (profile_id, display_name) VALUES ($1, $2)")
            .bind(owner_id)
            .bind("Test Owner")
            .execute(pool)
            .await?;
        Ok(owner_id)
    }

    async fn seed_venue(pool: &sqlx::PgPool) -> anyhow::Result<VenueId> {
        let venue_id = VenueId::new();
        sqlx::query(
            r#"
                INSERT INTO venues
                (venue_id, venue_name, city, image_url, hourly_price)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(venue_id)
        .bind("Test Venue")
        .bind("Tokyo")
        .bind("https://example.com/venue.jpg")
        .bind(2000)
        .execute(pool)
        .await?;
        Ok(venue_id)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    fn time(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    fn event(
        venue_id: VenueId,
        owner_id: OwnerId,
        start_hour: u32,
        duration_hours: i32,
    ) -> CreateBooking {
        CreateBooking::new(
            venue_id,
            owner_id,
            date(),
            time(start_hour),
            time(start_hour + duration_hours as u32),
            duration_hours,
        )
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn created_booking_reads_back_with_venue_data(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let owner_id = seed_owner(&pool).await?;
        let venue_id = seed_venue(&pool).await?;

        let booking_id = repo.create(event(venue_id, owner_id, 9, 2)).await?;
        let booking = repo.find_by_id(booking_id).await?;

        assert_eq!(booking.booking_id, booking_id);
        assert_eq!(booking.booked_by, owner_id);
        assert_eq!(booking.date, date());
        assert_eq!(booking.start_time, time(9));
        assert_eq!(booking.end_time, time(11));
        assert_eq!(booking.duration_hours, 2);
        assert_eq!(booking.venue.venue_id, venue_id);
        assert_eq!(booking.venue.venue_name, "Test Venue");
        assert_eq!(booking.total_price(), 4000);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn exact_duplicate_slot_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let owner_id = seed_owner(&pool).await?;
        let venue_id = seed_venue(&pool).await?;

        repo.create(event(venue_id, owner_id, 9, 2)).await?;
        let res = repo.create(event(venue_id, owner_id, 9, 2)).await;
        assert!(matches!(res, Err(AppError::SlotTaken)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn partial_overlap_with_different_start_is_rejected(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let owner_id = seed_owner(&pool).await?;
        let venue_id = seed_venue(&pool).await?;

        // 09:00-11:00, then 10:00-11:00 which the unique constraint alone
        // would not catch.
        repo.create(event(venue_id, owner_id, 9, 2)).await?;
        let res = repo.create(event(venue_id, owner_id, 10, 1)).await;
        assert!(matches!(res, Err(AppError::SlotTaken)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn adjacent_slots_both_commit(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let owner_id = seed_owner(&pool).await?;
        let venue_id = seed_venue(&pool).await?;

        repo.create(event(venue_id, owner_id, 9, 2)).await?;
        repo.create(event(venue_id, owner_id, 11, 1)).await?;

        let bookings = repo.find_by_venue_and_date(venue_id, date()).await?;
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].start_time, time(9));
        assert_eq!(bookings[1].start_time, time(11));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn same_date_other_venue_is_unaffected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let owner_id = seed_owner(&pool).await?;
        let venue_a = seed_venue(&pool).await?;
        let venue_b = seed_venue(&pool).await?;

        repo.create(event(venue_a, owner_id, 9, 2)).await?;
        repo.create(event(venue_b, owner_id, 9, 2)).await?;

        assert_eq!(repo.find_by_venue_and_date(venue_a, date()).await?.len(), 1);
        assert_eq!(repo.find_by_venue_and_date(venue_b, date()).await?.len(), 1);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn concurrent_admissions_leave_no_overlap(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = Arc::new(BookingRepositoryImpl::new(ConnectionPool::new(pool.clone())));
        let owner_id = seed_owner(&pool).await?;
        let venue_id = seed_venue(&pool).await?;

        // Same slot raced from two tasks; exactly one may win.
        let first = {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.create(event(venue_id, owner_id, 9, 2)).await })
        };
        let second = {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.create(event(venue_id, owner_id, 9, 2)).await })
        };

        let outcomes = [first.await?, second.await?];
        let winners = outcomes.iter().filter(|res| res.is_ok()).count();
        assert_eq!(winners, 1);

        let bookings = repo.find_by_venue_and_date(venue_id, date()).await?;
        assert_eq!(bookings.len(), 1);
        Ok(())
    }
}
