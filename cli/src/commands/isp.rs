use colored::*;
use solid_core::adapters::outbound::office::{InkjetPrinter, MultiFunctionPrinter};
use solid_core::config::Config;
use solid_core::ports::outbound::device::{DocumentPrinter, DocumentScanner};

use crate::terminal::print;

pub fn isp(cfg: &Config) -> anyhow::Result<()> {
    print::header("interface segregation", cfg.quiet);
    print::note("Two small contracts instead of one fat one.", cfg.quiet);

    let workhorse = MultiFunctionPrinter;
    print::tree_head(0, "MultiFunctionPrinter");
    print::tree(vec![
        ("print".to_string(), workhorse.print_document().normal()),
        ("scan".to_string(), workhorse.scan_document().normal()),
    ]);
    print::blank();

    let inkjet = InkjetPrinter;
    print::tree_head(1, "InkjetPrinter");
    print::tree(vec![(
        "print".to_string(),
        inkjet.print_document().normal(),
    )]);

    Ok(())
}
