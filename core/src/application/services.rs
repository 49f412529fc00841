//! # Application Services
//!
//! The use cases of the tour, each a thin orchestration over the Domain and
//! the Ports.
//!
//! ## Available Services
//! * [`notification::Notification`]: forwards messages through whichever
//!   [`Notifier`](crate::ports::outbound::notifier::Notifier) it was built
//!   with.

pub mod notification;
