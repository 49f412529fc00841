//! # Terminal Rendering
//!
//! Presentation of domain objects. [`InvoicePrinter`] exists so
//! [`Invoice`] never has to know what a line of output looks like.

use crate::domain::models::invoice::Invoice;

#[derive(Debug, Default, Clone, Copy)]
pub struct InvoicePrinter;

impl InvoicePrinter {
    /// Render the one-line summary for `invoice`.
    pub fn render(&self, invoice: &Invoice) -> String {
        format!("Invoice total: {:.2}", invoice.total())
    }
}
