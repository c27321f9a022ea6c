use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    /// A read against the catalog store failed. `context` names the key input
    /// (category id, ancestry ids, ...) so the failure can be diagnosed from logs.
    #[error("{operation} failed for {context}: {source}")]
    DataAccess {
        operation: &'static str,
        context: String,
        #[source]
        source: Box<CatalogError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CatalogError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::DataAccess { .. } => "DATA_ACCESS_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Sqlite(_) => "SQLITE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub(crate) fn mutex_poisoned(name: &str) -> Self {
        Self::Internal(format!("{name} mutex poisoned"))
    }

    /// Wraps a store failure with the operation and key input that triggered it.
    /// An error that is already a data-access failure is passed through unchanged.
    pub fn data_access(operation: &'static str, context: impl Into<String>, source: Self) -> Self {
        match source {
            already @ Self::DataAccess { .. } => already,
            other => Self::DataAccess {
                operation,
                context: context.into(),
                source: Box::new(other),
            },
        }
    }

    /// Message safe to hand to a transport response: data-access failures
    /// keep the operation and key input but drop the store's own error text.
    pub fn public_message(&self) -> String {
        match self {
            Self::DataAccess {
                operation, context, ..
            } => format!("{operation} failed for {context}"),
            Self::Io(_) | Self::Sqlite(_) | Self::Json(_) | Self::Internal(_) => {
                "internal catalog error".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn to_payload(
        &self,
        operation: impl Into<String>,
        category_id: Option<i64>,
    ) -> ErrorPayload {
        ErrorPayload {
            code: self.code().to_string(),
            message: self.public_message(),
            operation: operation.into(),
            trace_id: Uuid::new_v4().to_string(),
            category_id,
            details: None,
        }
    }
}
