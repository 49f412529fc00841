use tracing::debug;

use crate::ports::outbound::notifier::Notifier;

/// High-level message dispatch.
///
/// Holds a boxed [`Notifier`] and nothing else. Which channel actually
/// carries the message is decided by whoever wires this up, never here.
pub struct Notification {
    service: Box<dyn Notifier>,
}

impl Notification {
    pub fn new(service: Box<dyn Notifier>) -> Self {
        Self { service }
    }

    /// Channel name of the held service.
    pub fn channel(&self) -> &'static str {
        self.service.channel()
    }

    /// Forward `message` to the held service and hand back its receipt.
    pub fn send_notification(&self, message: &str) -> String {
        debug!(channel = self.service.channel(), "dispatching notification");
        self.service.send(message)
    }
}
