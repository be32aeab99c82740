//! JSON body extractor with structured rejections.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but a malformed body, wrong content type or missing
/// required field is rendered as an [`AppError::JsonExtractorRejection`]
/// keeping axum's status code (400, 415 or 422).
///
/// ```ignore
/// async fn create(JsonBody(input): JsonBody<ProductInput>) -> impl IntoResponse { ... }
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
