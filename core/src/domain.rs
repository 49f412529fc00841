//! # Domain Layer (Core)
//!
//! The demonstration subjects themselves.
//!
//! ## Characteristics
//! * **Pure Rust**: No IO, no system calls, no terminal knowledge.
//! * **Independence**: Does not know about Ports, Adapters, or the CLI.
//!
//! ## Contents
//! * **[`models`]**: The entities and value objects under demonstration.

pub mod models;
