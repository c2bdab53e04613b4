use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sp_scheduler::ScheduleError;
use thiserror::Error;

/// Shown when a well-formed request cannot be packed into its date range
pub const UNSATISFIABLE_MESSAGE: &str = "Could not fit all study hours into the requested \
     schedule. Try extending the date range, shortening sessions or allowing more sessions per day.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Schedule(e) if e.is_configuration() => StatusCode::BAD_REQUEST,
            Self::Schedule(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "Database error");
                "Internal server error".to_string()
            }
            Self::Validation(msg) => msg.clone(),
            Self::Schedule(ScheduleError::Unsatisfiable) => UNSATISFIABLE_MESSAGE.to_string(),
            Self::Schedule(e) => e.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
