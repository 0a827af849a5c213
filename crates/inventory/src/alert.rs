//! Low-stock alert delivery.

use serde::{Deserialize, Serialize};

/// Severity attached to an alert message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Error,
}

/// Receiver for alert notifications emitted by the inventory manager.
///
/// The manager emits exactly one warning-severity message per low-stock
/// evaluation that trips the threshold, and nothing otherwise. Test code can
/// inject a recording sink to assert on that contract.
pub trait AlertSink {
    fn notify(&mut self, severity: AlertSeverity, message: &str);
}

/// Production sink: forwards alerts to `tracing` at the matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlertSink;

impl AlertSink for TracingAlertSink {
    fn notify(&mut self, severity: AlertSeverity, message: &str) {
        match severity {
            AlertSeverity::Info => tracing::info!("{message}"),
            AlertSeverity::Warning => tracing::warn!("{message}"),
            AlertSeverity::Error => tracing::error!("{message}"),
        }
    }
}
