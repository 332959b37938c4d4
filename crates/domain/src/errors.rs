//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SkyLedger
///
/// Business-rule outcomes never surface here; the allocation pipeline is
/// total over its inputs. Only the injected read-side lookups (flight
/// history, autocomplete, profile) can fail.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SkyLedgerError {
    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for SkyLedger operations
pub type Result<T> = std::result::Result<T, SkyLedgerError>;
