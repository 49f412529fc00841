//! # Solid Codebase
//!
//! `solid` is a guided tour of five design principles, each demonstrated by
//! a small working example. The crate is arranged with **Hexagonal
//! Architecture**, so the layout itself makes the argument.
//!
//! ## Architecture Overview
//! * **[`domain`]**: The demonstration subjects (invoices, shapes, birds).
//!     Pure Rust, no IO. *Center of the Hexagon*.
//! * **[`application`]**: Use-case services orchestrating the Domain and Ports.
//!     *Application Layer*.
//! * **[`ports`]**: Traits separating the demonstrations from any concrete
//!     machinery. *Boundaries of the Hexagon*.
//! * **[`adapters`]**: Concrete implementations of Ports (channels, devices,
//!     terminal rendering). *Outside the Hexagon*.
//!
//! The CLI crate is the inbound side: it drives the services and prints
//! whatever they hand back.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
