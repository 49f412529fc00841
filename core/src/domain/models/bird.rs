//! # Bird Models
//!
//! Every bird promises [`Bird::fly`]. One variant refuses to keep the
//! promise, which is exactly what this module is here to show: callers that
//! treat all birds alike will trip over the penguin.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlightError {
    /// The species never flies, promise or not.
    #[error("{0}s cannot fly")]
    Flightless(&'static str),
}

pub trait Bird {
    fn species(&self) -> &'static str;

    /// A report of the flight, or why there was none.
    fn fly(&self) -> Result<String, FlightError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sparrow;

impl Bird for Sparrow {
    fn species(&self) -> &'static str {
        "Sparrow"
    }

    fn fly(&self) -> Result<String, FlightError> {
        Ok(format!("{} is flying", self.species()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Penguin;

impl Bird for Penguin {
    fn species(&self) -> &'static str {
        "Penguin"
    }

    // Broken on purpose. Do not teach penguins to fly.
    fn fly(&self) -> Result<String, FlightError> {
        Err(FlightError::Flightless(self.species()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparrow_reports_its_flight() {
        assert_eq!(Sparrow.fly().unwrap(), "Sparrow is flying");
    }

    #[test]
    fn penguin_never_returns_a_flight() {
        let err = Penguin.fly().unwrap_err();
        assert_eq!(err, FlightError::Flightless("Penguin"));
        assert_eq!(err.to_string(), "Penguins cannot fly");
    }

    #[test]
    fn penguin_fails_every_single_time() {
        let penguin = Penguin;
        for _ in 0..3 {
            assert!(penguin.fly().is_err(), "the violation must be reliable");
        }
    }
}
