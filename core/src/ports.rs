//! # Ports Layer (Boundaries)
//!
//! Traits that isolate the demonstrations from any concrete machinery.
//!
//! ## Dependency Rule
//! * The Application and the CLI depend on these traits.
//! * The Adapters implement them.
//! * Swapping an adapter never touches the code holding the port.

pub mod outbound;
