//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::StatusError;

/// Map an error to the single message printed on stderr.
pub fn map_error(e: &StatusError) -> String {
    e.to_string().trim_end().to_string()
}
