//! Inventory management.
//!
//! This crate owns the product catalog, the append-only transaction history,
//! low-stock alerting, and top-N stock reporting. It stays deterministic
//! domain logic: the only outward edges are the [`AlertSink`] and
//! [`StatusProbe`] collaborator traits, injected by callers.

pub mod alert;
pub mod manager;
pub mod status;


pub use alert::{AlertSeverity, AlertSink, TracingAlertSink};
pub use manager::InventoryManager;
pub use status::{CheckOutcome, StatusProbe, StatusProbeError};
