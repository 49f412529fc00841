//! # Office Devices
//!
//! Each device implements only the document contracts it can honor.

use crate::ports::outbound::device::{DocumentPrinter, DocumentScanner};

/// Does both, because it can.
#[derive(Debug, Default, Clone, Copy)]
pub struct MultiFunctionPrinter;

impl DocumentPrinter for MultiFunctionPrinter {
    fn print_document(&self) -> String {
        "Printing document".to_string()
    }
}

impl DocumentScanner for MultiFunctionPrinter {
    fn scan_document(&self) -> String {
        "Scanning document".to_string()
    }
}

/// Prints, and that is all. No scanner contract, no stub.
#[derive(Debug, Default, Clone, Copy)]
pub struct InkjetPrinter;

impl DocumentPrinter for InkjetPrinter {
    fn print_document(&self) -> String {
        "Printing document".to_string()
    }
}
