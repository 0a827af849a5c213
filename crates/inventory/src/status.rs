//! External status-check collaborator contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockledger_core::ProductId;

/// Failure modes of the external status-check collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatusProbeError {
    /// The collaborator rejected the request as malformed.
    #[error("status check validation failure: {0}")]
    Validation(String),

    /// The collaborator failed at runtime (connectivity, backend, ...).
    #[error("status check runtime failure: {0}")]
    Runtime(String),
}

/// External per-product status lookup.
///
/// Implementations may block; the manager never retries or time-bounds the
/// call. Retry policy, if any, belongs behind the implementation.
pub trait StatusProbe {
    /// Check a product's status, returning the collaborator's status code.
    fn check_status(&mut self, product_id: &ProductId) -> Result<u16, StatusProbeError>;

    /// Fire-and-forget per-product status fetch used by batch checks. Results
    /// are not aggregated.
    fn fetch_status(&mut self, product_id: &ProductId);
}

/// Outcome of mapping a status-check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckOutcome {
    /// The collaborator returned the success code (200).
    Processed,
    /// The collaborator returned the validation-failure code (400) or
    /// signalled a validation failure.
    FailedValidation,
    /// The collaborator signalled a runtime failure.
    ErrorRuntime,
    /// Any other status code.
    Unexpected,
}
