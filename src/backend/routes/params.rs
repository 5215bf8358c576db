//! Path parameter parsing
//!
//! Ids arrive as raw strings so a non-numeric id can be answered with a 400
//! and a readable message instead of axum's default path rejection.

use crate::backend::error::BackendError;

/// Parse a numeric path id, `what` names the entity in the error message
pub fn parse_id(raw: &str, what: &str) -> Result<i64, BackendError> {
    raw.trim().parse::<i64>().map_err(|_| {
        tracing::warn!("Invalid {} ID in path: {:?}", what, raw);
        BackendError::bad_request(format!("Invalid {} ID", what))
    })
}
