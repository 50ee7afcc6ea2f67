use crate::database::{model::venue::VenueRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::VenueId, venue::Venue};
use kernel::repository::venue::VenueRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct VenueRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl VenueRepository for VenueRepositoryImpl {
    async fn find_by_id(&self, venue_id: VenueId) -> AppResult<Option<Venue>> {
        let row = sqlx::query_as::<_, VenueRow>(
            r#"
                SELECT
                    venue_id,
                    venue_name,
                    city,
                    image_url,
                    open_hour,
                    close_hour,
                    hourly_price
                FROM venues
                WHERE venue_id = $1
            "#,
        )
        .bind(venue_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Venue::from))
    }
}
