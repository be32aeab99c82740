use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(i64),

    #[error("Product with barcode '{0}' not found")]
    BarcodeNotFound(String),

    #[error("Product with barcode '{0}' already exists")]
    DuplicateBarcode(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Maps a failed insert/update, turning unique violations into
    /// [`ProductError::DuplicateBarcode`] for `barcode`.
    pub fn from_write(err: DbErr, barcode: &str) -> Self {
        if is_unique_violation(&err) {
            ProductError::DuplicateBarcode(barcode.to_string())
        } else {
            ProductError::from(err)
        }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return true;
    }
    // Mocked and wrapped errors carry no SQLSTATE, only the message.
    let msg = err.to_string();
    msg.contains("duplicate key") || msg.contains("unique constraint")
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) | ProductError::BarcodeNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            ProductError::DuplicateBarcode(_) => AppError::Conflict(err.to_string()),
            ProductError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
