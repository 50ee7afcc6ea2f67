use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{create_booking, get_availability};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let venue_routers = Router::new()
        .route("/:venue_id/availability", get(get_availability))
        .route("/:venue_id/book", post(create_booking));

    Router::new().nest("/venue", venue_routers)
}
