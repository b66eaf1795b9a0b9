//! `Logger` port backed by `tracing`.

use crate::ports::Logger;

/// Forwards log messages to the `tracing` subscriber installed at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "order_desk", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "order_desk", "{}", message);
    }
}
