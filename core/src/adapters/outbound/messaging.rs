//! # Message Channels
//!
//! Concrete [`Notifier`] implementations. Neither talks to a real gateway;
//! each renders the receipt a real channel would log.

use crate::ports::outbound::notifier::Notifier;

#[derive(Debug, Default, Clone, Copy)]
pub struct EmailService;

impl Notifier for EmailService {
    fn channel(&self) -> &'static str {
        "email"
    }

    fn send(&self, message: &str) -> String {
        format!("Sending email: {message}")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SmsService;

impl Notifier for SmsService {
    fn channel(&self) -> &'static str {
        "sms"
    }

    fn send(&self, message: &str) -> String {
        format!("Sending SMS: {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_receipt() {
        assert_eq!(EmailService.send("X"), "Sending email: X");
        assert_eq!(EmailService.channel(), "email");
    }

    #[test]
    fn sms_receipt() {
        assert_eq!(SmsService.send("X"), "Sending SMS: X");
        assert_eq!(SmsService.channel(), "sms");
    }
}
