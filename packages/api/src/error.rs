use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::schema::SchemaError;

#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    public_code: String,
    public_message: Option<String>,
}

impl ApiError {
    fn new(status: StatusCode, public_code: impl Into<String>, public_message: Option<String>) -> Self {
        Self {
            status,
            public_code: public_code.into(),
            public_message,
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::error!("Internal error: {}", msg);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", None)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Not found: {}", msg);
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", Some(msg))
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Bad request: {}", msg);
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", Some(msg))
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Conflict: {}", msg);
        Self::new(StatusCode::CONFLICT, "CONFLICT", Some(msg))
    }

    /// Submission payload referenced a key with no matching column in the
    /// dedicated table. Resolved by re-syncing the form schema via edit.
    pub fn column_mismatch(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Column mismatch: {}", msg);
        Self::new(StatusCode::BAD_REQUEST, "COLUMN_MISMATCH", Some(msg))
    }

    /// Generated DDL was rejected by the store. Not retryable: an
    /// identical statement fails identically.
    pub fn ddl(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::error!("DDL rejected: {}", msg);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "DDL_ERROR", None)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorEnvelope<'a> {
            error: ErrorBody<'a>,
        }

        #[derive(Serialize)]
        struct ErrorBody<'a> {
            code: &'a str,
            message: &'a str,
        }

        let public_message = self
            .public_message
            .as_deref()
            .unwrap_or_else(|| self.status.canonical_reason().unwrap_or("Error"));

        (
            self.status,
            Json(ErrorEnvelope {
                error: ErrorBody {
                    code: self.public_code.as_str(),
                    message: public_message,
                },
            }),
        )
            .into_response()
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        if let Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) = err.sql_err() {
            return Self::conflict(format!("Duplicate identifier: {}", msg));
        }
        let msg = err.to_string();
        // MySQL 1054: the payload referenced a key the dedicated table has
        // no column for.
        if msg.contains("Unknown column") {
            return Self::column_mismatch(msg);
        }
        tracing::error!("Database error: {:?}", err);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR", None)
    }
}

impl From<sea_orm::TransactionError<ApiError>> for ApiError {
    fn from(err: sea_orm::TransactionError<ApiError>) -> Self {
        match err {
            sea_orm::TransactionError::Connection(db_err) => db_err.into(),
            sea_orm::TransactionError::Transaction(api_err) => api_err,
        }
    }
}

impl From<SchemaError> for ApiError {
    fn from(err: SchemaError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::warn!("JSON error: {:?}", err);
        Self::bad_request(format!("JSON error: {}", err))
    }
}

impl std::error::Error for ApiError {}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.public_code.as_str())
    }
}
