//! JSON extractor whose rejection is rendered as an [`ErrorResponse`](crate::ErrorResponse).

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::Json`] on the request side.
///
/// Axum's own rejection is plain text; this one keeps the rejection's
/// status (400, 415 or 422) but answers with the shared JSON error body.
///
/// # Example
/// ```ignore
/// use axum::routing::post;
/// use axum_helpers::JsonBody;
///
/// async fn create(JsonBody(payload): JsonBody<CreateThing>) -> String {
///     format!("Creating {}", payload.name)
/// }
///
/// let app = axum::Router::new().route("/things", post(create));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}
