//! The entities under demonstration.
//!
//! * **[`invoice`]**: amounts, tax, totals.
//! * **[`shape`]**: one area contract, several variants.
//! * **[`bird`]**: one flight contract, one deliberate violator.
//! * **[`principle`]**: the catalog the CLI walks.

pub mod bird;
pub mod invoice;
pub mod principle;
pub mod shape;
