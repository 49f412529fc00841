//! # Principle Catalog
//!
//! Names and one-line summaries for the five demonstrations, in the order
//! the combined run walks them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "SRP",
            Principle::OpenClosed => "OCP",
            Principle::LiskovSubstitution => "LSP",
            Principle::InterfaceSegregation => "ISP",
            Principle::DependencyInversion => "DIP",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "single responsibility",
            Principle::OpenClosed => "open / closed",
            Principle::LiskovSubstitution => "liskov substitution",
            Principle::InterfaceSegregation => "interface segregation",
            Principle::DependencyInversion => "dependency inversion",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => {
                "One type computes the invoice, another presents it."
            }
            Principle::OpenClosed => {
                "New shapes slot in without editing the ones already there."
            }
            Principle::LiskovSubstitution => {
                "Every bird promises to fly; the penguin breaks the promise."
            }
            Principle::InterfaceSegregation => {
                "Printing and scanning are separate contracts, taken as needed."
            }
            Principle::DependencyInversion => {
                "Notification talks to an abstraction, never to a concrete channel."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_five_in_walk_order() {
        let codes: Vec<&str> = Principle::ALL.iter().map(|p| p.code()).collect();
        assert_eq!(codes, ["SRP", "OCP", "LSP", "ISP", "DIP"]);
    }
}
