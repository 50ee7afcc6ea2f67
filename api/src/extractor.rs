use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use kernel::model::id::OwnerId;
use serde::de::DeserializeOwned;
use shared::error::AppError;
use uuid::Uuid;

/// Identity of the caller as established by the external auth service and
/// forwarded on the `X-Owner-Id` header. The booking core never consults
/// sessions itself; the owner always arrives as an explicit argument.
pub struct BookingOwner(OwnerId);

impl BookingOwner {
    pub fn id(&self) -> OwnerId {
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BookingOwner
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let owner_id = parts
            .headers
            .get("X-Owner-Id")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<Uuid>().ok())
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self(OwnerId::from(owner_id)))
    }
}

/// Request-body extractor that keeps deserialization failures inside the
/// booking error contract: every malformed body becomes a 400
/// `MalformedInput` with a JSON `{"error": ...}` body instead of axum's
/// default rejection.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(map_json_rejection(rejection)),
        }
    }
}

fn map_json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        // A field-level type mismatch on duration_hours is the one
        // coercion the protocol names explicitly.
        JsonRejection::JsonDataError(err) if err.body_text().contains("duration_hours") => {
            AppError::MalformedInput("Duration must be an integer.".into())
        }
        _ => AppError::MalformedInput("Invalid JSON payload.".into()),
    }
}
