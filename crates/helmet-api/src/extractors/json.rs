//! JSON body extractor whose rejections use the API error body.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use helmet_core::error::AppError;

use crate::error::ApiError;

/// Like [`axum::Json`], but malformed, oversized, or unknown-field bodies
/// become a `BAD_REQUEST` [`ApiError`].
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), "Rejected request body");
                Err(AppError::bad_request(rejection.body_text()).into())
            }
        }
    }
}
