//! Office device capabilities, one per trait.
//!
//! A device implements exactly the contracts it can honor. Print-only
//! hardware is never forced to stub a scanner.

pub trait DocumentPrinter {
    fn print_document(&self) -> String;
}

pub trait DocumentScanner {
    fn scan_document(&self) -> String;
}
