use crate::model::{id::VenueId, venue::Venue};
use async_trait::async_trait;
use shared::error::AppResult;

/// Read-only view onto the externally managed venue records.
#[async_trait]
pub trait VenueRepository: Send + Sync {
    async fn find_by_id(&self, venue_id: VenueId) -> AppResult<Option<Venue>>;
}
