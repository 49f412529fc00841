//! # Adapters Layer (Infrastructure)
//!
//! Concrete implementations of the [`crate::ports`] traits, grouped by the
//! kind of machinery they stand in for.
//!
//! The inbound (driving) side lives in the CLI crate; everything here is
//! driven by it, directly or through an application service.

pub mod outbound;
