//! Shell output: error mapping from domain errors to user-facing lines.

use crate::error::ApiError;

/// Map domain/service errors to a string for shell output.
pub fn map_error(e: &ApiError) -> String {
    e.to_string()
}
