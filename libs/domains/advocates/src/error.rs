use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AdvocateError {
    /// The backing store could not be reached or no connection was available.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AdvocateResult<T> = Result<T, AdvocateError>;

impl From<DbErr> for AdvocateError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                AdvocateError::StoreUnavailable(err.to_string())
            }
            other => AdvocateError::Internal(format!("Database error: {other}")),
        }
    }
}

impl From<AdvocateError> for AppError {
    fn from(err: AdvocateError) -> Self {
        match err {
            AdvocateError::StoreUnavailable(detail) => AppError::StoreUnavailable(detail),
            AdvocateError::Validation(errors) => AppError::ValidationError(errors),
            AdvocateError::Internal(detail) => AppError::InternalServerError(detail),
        }
    }
}

impl IntoResponse for AdvocateError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
