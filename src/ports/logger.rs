//! Logger port.
//!
//! Fire-and-forget sink for operational messages. Nothing in the core
//! depends on whether a message was actually written.

pub trait Logger: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}
