//! Outbound (driven) capabilities: contracts the demonstrations call out
//! through, implemented by [`crate::adapters::outbound`].

pub mod device;
pub mod notifier;
