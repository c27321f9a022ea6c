use std::time::Instant;

use tracing::{debug, error};

use crate::error::{CatalogError, Result};

use super::PrsCatalog;

impl PrsCatalog {
    pub(super) fn log_request_status(
        &self,
        request_id: &str,
        operation: &str,
        started: Instant,
        details: Option<serde_json::Value>,
    ) {
        debug!(
            request_id,
            operation,
            status = "ok",
            latency_ms = started.elapsed().as_millis() as u64,
            details = ?details,
            "catalog request finished"
        );
    }

    pub(super) fn log_request_error(
        &self,
        request_id: &str,
        operation: &str,
        started: Instant,
        err: &CatalogError,
        details: Option<serde_json::Value>,
    ) {
        error!(
            request_id,
            operation,
            status = "error",
            latency_ms = started.elapsed().as_millis() as u64,
            error_code = err.code(),
            error = %err,
            details = ?details,
            "catalog request failed"
        );
    }

    /// Logs the outcome of `output` and hands it back unchanged.
    pub(super) fn finish_request<T>(
        &self,
        request_id: &str,
        operation: &str,
        started: Instant,
        details: serde_json::Value,
        output: Result<T>,
        summarize: impl FnOnce(&T) -> serde_json::Value,
    ) -> Result<T> {
        match &output {
            Ok(value) => {
                let mut details = details;
                if let (Some(map), serde_json::Value::Object(extra)) =
                    (details.as_object_mut(), summarize(value))
                {
                    map.extend(extra);
                }
                self.log_request_status(request_id, operation, started, Some(details));
            }
            Err(err) => self.log_request_error(request_id, operation, started, err, Some(details)),
        }
        output
    }
}
