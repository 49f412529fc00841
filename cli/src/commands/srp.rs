use colored::*;
use solid_core::adapters::outbound::terminal::InvoicePrinter;
use solid_core::config::Config;
use solid_core::domain::models::invoice::Invoice;
use tracing::debug;

use crate::terminal::print;

pub fn srp(cfg: &Config) -> anyhow::Result<()> {
    print::header("single responsibility", cfg.quiet);
    print::note("Invoice prices itself; InvoicePrinter presents it.", cfg.quiet);

    debug!("pricing the demonstration invoice");
    let invoice = Invoice::new(100.0);

    print::aligned_line("Amount", format!("{:.2}", invoice.amount));
    print::aligned_line("Tax", format!("{:.2}", invoice.tax()).yellow());
    print::aligned_line("Total", format!("{:.2}", invoice.total()).green().bold());

    let printer = InvoicePrinter;
    print::status(printer.render(&invoice));

    Ok(())
}
